use clap::Subcommand;
use venturekid_core::catalog;
use venturekid_core::storage::Config;

use super::common;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// Print the resolved course catalog
    Show {
        /// Print the raw JSON instead of the outline
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CatalogAction::Show { json } => {
            let resolved = catalog::resolve(&Config::load_or_default());
            if json {
                common::print_json(&resolved)?;
            } else {
                for section in &resolved.sections {
                    println!("{}", section.title);
                    for module in &section.modules {
                        println!("  {}", module.title);
                        for lesson in &module.lessons {
                            println!(
                                "    [{}] {} ({})",
                                lesson.kind.label(),
                                lesson.title,
                                lesson.id
                            );
                        }
                    }
                }
            }
        }
    }
    Ok(())
}
