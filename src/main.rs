use clap::{Parser, Subcommand};
use cookbook_index::{
    process_cookbook_file, CookbookConfig, CookbookSite, DirSink, OutputLayout, SourceErrorPolicy,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cookbook-index", version, about = "Split cookbooks into recipes and index them")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split one cookbook: per-recipe extracts, TOC, ingredient index, HTML export
    Split {
        /// Page dump of the cookbook
        file: PathBuf,
        /// Output directory (defaults to the configured output_dir)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Build the searchable master site from several cookbooks
    Site {
        /// Sources as NAME=FILE; configured sources are used when none are given
        #[arg(value_parser = parse_source)]
        sources: Vec<(String, PathBuf)>,
        /// Output directory (defaults to <output_dir>/<site_dir>)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Skip unreadable sources instead of aborting
        #[arg(long)]
        skip_unreadable: bool,
        /// Heading of the index page
        #[arg(long)]
        title: Option<String>,
    },
}

fn parse_source(value: &str) -> Result<(String, PathBuf), String> {
    match value.split_once('=') {
        Some((name, path)) if !name.trim().is_empty() && !path.is_empty() => {
            Ok((name.trim().to_string(), PathBuf::from(path)))
        }
        _ => Err(format!("expected NAME=FILE, got '{value}'")),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = CookbookConfig::load()?;

    match cli.command {
        Command::Split { file, out } => {
            let out = out.unwrap_or_else(|| config.output_dir.clone());
            let report = process_cookbook_file(&file, &out, &OutputLayout::from(&config))?;
            println!(
                "Split {} recipes ({} indexed words) to: {}",
                report.recipes,
                report.indexed_words,
                out.display()
            );
        }
        Command::Site {
            sources,
            out,
            skip_unreadable,
            title,
        } => {
            let out = out.unwrap_or_else(|| config.output_dir.join(&config.site_dir));
            let mut builder = if sources.is_empty() {
                CookbookSite::builder().with_config(&config)
            } else {
                sources.into_iter().fold(
                    CookbookSite::builder()
                        .on_source_error(config.on_source_error)
                        .title(config.site_title.clone()),
                    |builder, (name, path)| builder.source(name, path),
                )
            };
            if skip_unreadable {
                builder = builder.on_source_error(SourceErrorPolicy::Skip);
            }
            if let Some(title) = title {
                builder = builder.title(title);
            }

            let sink = DirSink::new(out);
            let report = builder.build(&sink)?;
            println!(
                "Site with {} recipes from {} sources saved to: {}",
                report.recipes,
                report.sources_built.len(),
                sink.root().display()
            );
            if !report.sources_skipped.is_empty() {
                let skipped: Vec<&str> = report
                    .sources_skipped
                    .iter()
                    .map(|(name, _)| name.as_str())
                    .collect();
                println!("Skipped unreadable sources: {}", skipped.join(", "));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        assert_eq!(
            parse_source("Grandma=books/grandma.json").unwrap(),
            ("Grandma".to_string(), PathBuf::from("books/grandma.json"))
        );
        assert!(parse_source("books/grandma.json").is_err());
        assert!(parse_source("=x.json").is_err());
    }
}
