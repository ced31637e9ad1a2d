use visigen_core::{AnalyzerConfig, ContentAnalyzer, ContentInput};

const SAMPLE: &str = "Revenue grew 25% in Q4. We should expand to Europe next year.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let text = if text.trim().is_empty() { SAMPLE.to_string() } else { text };

    let analyzer = ContentAnalyzer::new(AnalyzerConfig::default())?;
    let analysis = analyzer.analyze(&ContentInput::text(text))?;

    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}
