//! Prompt construction and response extraction.

use adscope_core::traits::{AdInput, BrandContext, ReportItem};

const ANALYSIS_PROMPT: &str = r#"You are an expert advertising analyst and copywriter. Analyze the following ad and provide detailed insights.

AD DETAILS:
- Ad Copy: {adCopy}
- Headline: {headline}
- Call to Action: {cta}
- Media Type: {mediaType}

BRAND CONTEXT (for repurposing):
{brandContext}

Provide your analysis in the following JSON format (respond ONLY with valid JSON):
{
  "framework": "Identify the copywriting framework used (e.g., AIDA, PAS, BAB, 4Ps, etc.) and explain how each element is applied",
  "hooks": "Identify the opening hook(s) - what grabs attention in the first 3 seconds or first line. List multiple if present",
  "concepts": "Describe the creative concept/angle being used. What's the big idea? What makes it unique?",
  "scripts": "If this appears to be a video ad, break down the likely script structure. If static, describe the visual storytelling flow",
  "targetAudience": "Who is this ad targeting? Be specific about demographics, psychographics, pain points, and desires",
  "emotionalTriggers": "What emotional triggers are being used? (fear, FOMO, aspiration, belonging, etc.)",
  "repurposedIdea": "Based on the brand context provided, suggest how this ad concept could be repurposed. Include a specific headline, hook, and angle that would work for the brand",
  "strengthsWeaknesses": "List 2-3 strengths and 2-3 potential weaknesses of this ad"
}"#;

fn render_brand_context(brand: &BrandContext) -> String {
    let fallback = "Not provided";
    format!(
        "\nBrand Name: {}\nDescription: {}\nTarget Audience: {}\nTone of Voice: {}\nProduct Info: {}\nIndustry: {}",
        brand.name,
        brand.description.as_deref().unwrap_or(fallback),
        brand.target_audience.as_deref().unwrap_or(fallback),
        brand.tone_of_voice.as_deref().unwrap_or(fallback),
        brand.product_info.as_deref().unwrap_or(fallback),
        brand.industry.as_deref().unwrap_or(fallback),
    )
}

/// Render the single-ad analysis prompt.
pub fn analysis_prompt(ad: &AdInput, brand: &BrandContext) -> String {
    ANALYSIS_PROMPT
        .replacen("{adCopy}", ad.ad_copy.as_deref().unwrap_or("Not available"), 1)
        .replacen("{headline}", ad.headline.as_deref().unwrap_or("Not available"), 1)
        .replacen("{cta}", ad.cta.as_deref().unwrap_or("Not available"), 1)
        .replacen("{mediaType}", ad.media_type.as_deref().unwrap_or("Unknown"), 1)
        .replacen("{brandContext}", &render_brand_context(brand), 1)
}

/// Render the aggregate competitor report prompt.
pub fn report_prompt(competitor_name: &str, items: &[ReportItem]) -> String {
    let mut sections = String::new();
    for (i, item) in items.iter().enumerate() {
        sections.push_str(&format!(
            "\nAd {}:\n- Copy: {}\n- Headline: {}\n- Framework: {}\n- Hooks: {}\n- Target Audience: {}\n",
            i + 1,
            item.ad_copy.as_deref().unwrap_or("N/A"),
            item.headline.as_deref().unwrap_or("N/A"),
            item.analysis.framework,
            item.analysis.hooks,
            item.analysis.target_audience,
        ));
    }

    format!(
        "Create a comprehensive competitor analysis report for {} based on these {} ads.\n\n\
         ADS AND ANALYSES:\n{}\n\n\
         Create a markdown report with:\n\
         1. Executive Summary\n\
         2. Common Patterns & Themes\n\
         3. Most Effective Hooks\n\
         4. Target Audience Insights\n\
         5. Recommended Strategies to Compete\n\
         6. Key Takeaways",
        competitor_name,
        items.len(),
        sections,
    )
}

/// Strip an optional markdown code fence from a model response.
///
/// Models regularly wrap JSON in ```json ... ``` fences despite being
/// asked not to.
pub fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();
    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        let after_lang = after_fence
            .strip_prefix("json")
            .unwrap_or(after_fence);
        if let Some(end) = after_lang.find("```") {
            return after_lang[..end].trim();
        }
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use adscope_core::traits::AdAnalysis;

    fn brand() -> BrandContext {
        BrandContext {
            name: "Acme Coffee".to_string(),
            description: Some("Specialty roaster".to_string()),
            target_audience: None,
            tone_of_voice: Some("Warm".to_string()),
            product_info: None,
            industry: Some("Food & Beverage".to_string()),
        }
    }

    #[test]
    fn test_analysis_prompt_substitutes_all_placeholders() {
        let ad = AdInput {
            ad_copy: Some("Best coffee ever".to_string()),
            headline: Some("Wake Up".to_string()),
            cta: None,
            media_type: Some("video".to_string()),
            media_url: None,
        };
        let prompt = analysis_prompt(&ad, &brand());
        assert!(prompt.contains("- Ad Copy: Best coffee ever"));
        assert!(prompt.contains("- Headline: Wake Up"));
        assert!(prompt.contains("- Call to Action: Not available"));
        assert!(prompt.contains("- Media Type: video"));
        assert!(prompt.contains("Brand Name: Acme Coffee"));
        assert!(prompt.contains("Target Audience: Not provided"));
        assert!(!prompt.contains("{adCopy}"));
        assert!(!prompt.contains("{brandContext}"));
    }

    #[test]
    fn test_prompt_keeps_json_contract_braces() {
        let prompt = analysis_prompt(&AdInput::default(), &brand());
        assert!(prompt.contains("\"framework\""));
        assert!(prompt.contains("\"strengthsWeaknesses\""));
    }

    #[test]
    fn test_report_prompt_numbers_ads() {
        let analysis = AdAnalysis {
            framework: "AIDA".to_string(),
            hooks: "Question hook".to_string(),
            concepts: "c".to_string(),
            scripts: "s".to_string(),
            target_audience: "Busy parents".to_string(),
            emotional_triggers: "e".to_string(),
            repurposed_idea: "r".to_string(),
            strengths_weaknesses: "sw".to_string(),
        };
        let items = vec![
            ReportItem {
                ad_copy: Some("copy one".to_string()),
                headline: None,
                analysis: analysis.clone(),
            },
            ReportItem {
                ad_copy: None,
                headline: Some("headline two".to_string()),
                analysis,
            },
        ];
        let prompt = report_prompt("Rival Inc", &items);
        assert!(prompt.contains("for Rival Inc based on these 2 ads"));
        assert!(prompt.contains("Ad 1:"));
        assert!(prompt.contains("Ad 2:"));
        assert!(prompt.contains("- Copy: copy one"));
        assert!(prompt.contains("- Headline: headline two"));
        assert!(prompt.contains("- Headline: N/A"));
    }

    #[test]
    fn test_extract_json_handles_fenced_response() {
        let response = "Here you go:\n```json\n{\"framework\": \"AIDA\"}\n```";
        assert_eq!(extract_json(response), "{\"framework\": \"AIDA\"}");
    }

    #[test]
    fn test_extract_json_handles_bare_fence() {
        let response = "```\n{\"a\":1}\n```";
        assert_eq!(extract_json(response), "{\"a\":1}");
    }

    #[test]
    fn test_extract_json_passes_through_plain_json() {
        assert_eq!(extract_json("  {\"a\":1}  "), "{\"a\":1}");
    }
}
