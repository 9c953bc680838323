//! Markdown documents and folder naming for the Drive archive.

use chrono::{DateTime, Utc};

use adscope_core::traits::AdAnalysis;
use adscope_entity::ad::Ad;

/// Folder name for today's analyses: `YYYY-MM-DD`.
pub fn date_folder_name(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// File name for a single-ad analysis document.
pub fn analysis_file_name(ad: &Ad) -> String {
    format!("analysis_{}.md", ad.ad_library_id)
}

/// File name for an aggregate competitor report.
pub fn report_file_name(at: DateTime<Utc>) -> String {
    format!("report_{}.md", date_folder_name(at))
}

/// Render the archived analysis document for one ad.
pub fn analysis_document(
    ad: &Ad,
    competitor_name: &str,
    brand_name: &str,
    analysis: &AdAnalysis,
    generated_at: DateTime<Utc>,
) -> String {
    format!(
        "# Ad Analysis: {title}\n\
         \n\
         ## Ad Details\n\
         - **Competitor**: {competitor}\n\
         - **Headline**: {headline}\n\
         - **CTA**: {cta}\n\
         - **Media Type**: {media_type}\n\
         - **Impressions**: {impressions}\n\
         \n\
         ## Ad Copy\n\
         {ad_copy}\n\
         \n\
         ---\n\
         \n\
         ## Analysis\n\
         \n\
         ### Framework\n\
         {framework}\n\
         \n\
         ### Hooks\n\
         {hooks}\n\
         \n\
         ### Creative Concepts\n\
         {concepts}\n\
         \n\
         ### Script Breakdown\n\
         {scripts}\n\
         \n\
         ### Target Audience\n\
         {target_audience}\n\
         \n\
         ### Emotional Triggers\n\
         {emotional_triggers}\n\
         \n\
         ### Strengths & Weaknesses\n\
         {strengths_weaknesses}\n\
         \n\
         ---\n\
         \n\
         ## Repurposed Idea for {brand}\n\
         {repurposed_idea}\n\
         \n\
         ---\n\
         *Generated on {generated_at}*\n",
        title = ad.headline.as_deref().unwrap_or("Untitled"),
        competitor = competitor_name,
        headline = ad.headline.as_deref().unwrap_or("N/A"),
        cta = ad.cta.as_deref().unwrap_or("N/A"),
        media_type = ad.media_type.as_deref().unwrap_or("Unknown"),
        impressions = ad.impression_range.as_deref().unwrap_or("Unknown"),
        ad_copy = ad.ad_copy.as_deref().unwrap_or("N/A"),
        framework = analysis.framework,
        hooks = analysis.hooks,
        concepts = analysis.concepts,
        scripts = analysis.scripts,
        target_audience = analysis.target_audience,
        emotional_triggers = analysis.emotional_triggers,
        strengths_weaknesses = analysis.strengths_weaknesses,
        brand = brand_name,
        repurposed_idea = analysis.repurposed_idea,
        generated_at = generated_at.to_rfc3339(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn sample_ad() -> Ad {
        let now = Utc::now();
        Ad {
            id: Uuid::new_v4(),
            competitor_id: Uuid::new_v4(),
            ad_library_id: "lib_42".to_string(),
            ad_copy: Some("Buy the thing.".to_string()),
            headline: Some("The Thing".to_string()),
            cta: None,
            media_url: None,
            media_type: Some("image".to_string()),
            thumbnail_url: None,
            landing_page: None,
            impression_range: Some("1M-5M".to_string()),
            start_date: None,
            status: "active".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_analysis() -> AdAnalysis {
        AdAnalysis {
            framework: "AIDA applied throughout".to_string(),
            hooks: "Product-name hook".to_string(),
            concepts: "Simplicity".to_string(),
            scripts: "Static flow".to_string(),
            target_audience: "Gadget buyers".to_string(),
            emotional_triggers: "FOMO".to_string(),
            repurposed_idea: "Lead with the name".to_string(),
            strengths_weaknesses: "Strong: clarity. Weak: no social proof.".to_string(),
        }
    }

    #[test]
    fn test_date_folder_name_format() {
        let at = Utc.with_ymd_and_hms(2025, 7, 4, 23, 59, 0).unwrap();
        assert_eq!(date_folder_name(at), "2025-07-04");
        assert_eq!(report_file_name(at), "report_2025-07-04.md");
    }

    #[test]
    fn test_analysis_file_name_uses_library_id() {
        assert_eq!(analysis_file_name(&sample_ad()), "analysis_lib_42.md");
    }

    #[test]
    fn test_analysis_document_sections() {
        let doc = analysis_document(
            &sample_ad(),
            "Rival Inc",
            "Acme",
            &sample_analysis(),
            Utc::now(),
        );
        assert!(doc.starts_with("# Ad Analysis: The Thing\n"));
        assert!(doc.contains("- **Competitor**: Rival Inc"));
        assert!(doc.contains("- **CTA**: N/A"));
        assert!(doc.contains("### Framework\nAIDA applied throughout"));
        assert!(doc.contains("## Repurposed Idea for Acme\nLead with the name"));
        assert!(doc.contains("*Generated on "));
    }

    #[test]
    fn test_analysis_document_untitled_fallback() {
        let mut ad = sample_ad();
        ad.headline = None;
        let doc = analysis_document(&ad, "Rival Inc", "Acme", &sample_analysis(), Utc::now());
        assert!(doc.starts_with("# Ad Analysis: Untitled\n"));
    }
}
