use parseinbox_config::{Config, OutputFormat};
use parseinbox_core::GeneralField;
use parseinbox_extract::{ExtractionEngine, Section};
use tracing::info;

/// Strategy for displaying configuration information.
///
/// This strategy outputs:
/// - Config file location and whether it exists
/// - Field, section and terminator labels
/// - Display settings
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let path = Config::path()?;
        let exists = path.exists();
        let config = Config::load_or_default()?;

        println!("=== parseinbox Configuration ===\n");

        println!("Config File:");
        println!("  Path: {}", path.display());
        println!(
            "  Status: {}",
            if exists { "Found" } else { "Not found (using defaults)" }
        );
        println!();

        println!("Field Labels:");
        for field in GeneralField::ALL {
            println!("  {}: {:?}", field.title(), config.labels.field(field));
        }
        println!();

        println!("Section Labels:");
        for section in Section::ALL {
            println!("  {}: {:?}", section.as_str(), config.labels.section(section));
        }
        if config.labels.section_terminators.is_empty() {
            println!("  Terminators: (none)");
        } else {
            println!(
                "  Terminators: {}",
                config
                    .labels
                    .section_terminators
                    .iter()
                    .map(|t| format!("{t:?}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        info!("Compiling label patterns");
        match ExtractionEngine::new(&config.labels) {
            Ok(_) => println!("  Status: Valid"),
            Err(e) => {
                println!("  Status: Invalid");
                println!("  Error: {e}");
            }
        }
        println!();

        println!("Display:");
        println!("  Absent Marker: {:?}", config.display.absent_marker);
        println!(
            "  Format: {}",
            match config.display.format {
                OutputFormat::Text => "text",
                OutputFormat::Json => "json",
            }
        );

        Ok(())
    }
}
