//! The `translations` subcommand: fetch, reconcile, validate, render, write.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Result, bail};
use chrono::Utc;
use clap::Args;
use langtool::types::language_map;
use langtool::{
    EntryFilter, LangApi, MergeMode, OutputFormat, RenderReport, hash_records, placeholder,
    reconcile,
};
use tracing::info;

use crate::ConnectionArgs;

#[derive(Args, Debug)]
pub struct TranslationsArgs {
    /// Target culture code, e.g. 'ru-ru'. Run `langtool languages` to see
    /// what is available
    #[arg(value_name = "CULTURE", default_value = "en", value_parser = parse_culture)]
    pub culture: String,

    /// Filters translations by application code
    #[arg(short = 'a', long = "application", value_name = "CODE")]
    pub applications: Vec<String>,

    /// Filters translations by section code
    #[arg(short = 's', long = "section", value_name = "CODE")]
    pub sections: Vec<String>,

    /// Version number to get translations for
    #[arg(short = 'v', long = "ver", value_name = "VERSION", value_parser = parse_version)]
    pub version: Option<String>,

    /// Format to output translations in: text, json, android, or ios
    #[arg(short = 'f', long, value_name = "FMT", default_value = "text", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Output translated items only
    #[arg(short = 't', long, conflicts_with = "untranslated")]
    pub translated: bool,

    /// Output untranslated items only
    #[arg(short = 'u', long)]
    pub untranslated: bool,

    /// Only include strings with format placeholders
    #[arg(short = 'p', long)]
    pub placeholders: bool,

    /// Searches translations by default English text containing TEXT
    #[arg(short = 'd', long = "search-default", value_name = "TEXT")]
    pub search_default: Option<String>,

    /// Searches translations by translated text containing TEXT
    #[arg(short = 'x', long = "search-translated", value_name = "TEXT")]
    pub search_translated: Option<String>,

    /// Output translations to a file instead of the console. If PATH is
    /// omitted, a name is generated from the filter codes, format, and
    /// culture
    #[arg(short = 'o', long, value_name = "PATH", num_args = 0..=1)]
    pub output: Option<Option<String>>,

    /// With --output, check the existing file and only overwrite it when
    /// translations have changed
    #[arg(long = "hash", requires = "output")]
    pub check_hash: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub async fn run(args: TranslationsArgs) -> Result<()> {
    if args.applications.is_empty() && args.sections.is_empty() {
        bail!("must specify an application filter or a section filter");
    }

    let mode = if args.untranslated {
        MergeMode::UntranslatedOnly
    } else if args.translated {
        MergeMode::TranslatedOnly
    } else {
        MergeMode::All
    };

    let filter = EntryFilter {
        applications: args.applications.clone(),
        sections: args.sections.clone(),
        keys: Vec::new(),
        version: args.version.clone(),
        default_text_contains: args.search_default.clone(),
        translated_text_contains: args.search_translated.clone(),
    };

    let api = LangApi::new(&args.connection.base_url, &args.connection.token)?;

    let (entries, translations, languages) = tokio::try_join!(
        api.entries(&filter),
        api.translations(&args.culture, &filter),
        api.languages(),
    )?;
    info!(
        "fetched {} entries and {} translations",
        entries.len(),
        translations.len()
    );

    let languages = language_map(languages);
    let language_name = languages
        .get(&args.culture.to_lowercase())
        .map(|language| language.name.clone());

    let records = reconcile(&entries, translations, mode);

    let records = if args.placeholders {
        records
            .into_iter()
            .filter(placeholder::has_placeholders)
            .collect()
    } else {
        placeholder::validate(&records)?;
        records
    };

    let digest = hash_records(&records);
    let report = RenderReport {
        records: &records,
        culture: &args.culture,
        language_name: language_name.as_deref(),
        applications: &args.applications,
        sections: &args.sections,
        note: mode.note(&args.culture),
        hash: &digest,
        generated: Utc::now(),
    };

    let rendered = args.format.render(&report)?;

    match output_path(&args) {
        Some(path) => {
            if args.check_hash && path.exists() {
                let existing = std::fs::read_to_string(&path)?;
                if args.format.extract_hash(&existing).as_deref() == Some(digest.as_str()) {
                    println!(
                        "Will not output, since strings have not changed in {} (hash: {digest})",
                        path.display()
                    );
                    return Ok(());
                }
            }

            std::fs::write(&path, &rendered)?;
            info!("wrote {} records to {}", records.len(), path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn output_path(args: &TranslationsArgs) -> Option<PathBuf> {
    match &args.output {
        None => None,
        Some(Some(path)) => Some(PathBuf::from(path)),
        Some(None) => Some(PathBuf::from(args.format.default_file_name(
            &args.applications,
            &args.sections,
            &args.culture,
        ))),
    }
}

fn parse_culture(value: &str) -> Result<String, langtool::Error> {
    langtool::types::validate_culture(value)?;
    Ok(value.to_string())
}

fn parse_version(value: &str) -> Result<String, langtool::Error> {
    langtool::types::validate_version(value)?;
    Ok(value.to_string())
}

fn parse_format(value: &str) -> Result<OutputFormat, langtool::Error> {
    OutputFormat::from_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> TranslationsArgs {
        TranslationsArgs {
            culture: "fr".to_string(),
            applications: vec!["myapp".to_string()],
            sections: Vec::new(),
            version: None,
            format: OutputFormat::Text,
            translated: false,
            untranslated: false,
            placeholders: false,
            search_default: None,
            search_translated: None,
            output: None,
            check_hash: false,
            connection: ConnectionArgs {
                token: "secret".to_string(),
                base_url: langtool::DEFAULT_BASE_URL.to_string(),
            },
        }
    }

    #[test]
    fn test_output_path_console() {
        assert!(output_path(&base_args()).is_none());
    }

    #[test]
    fn test_output_path_explicit() {
        let mut args = base_args();
        args.output = Some(Some("out/translations.txt".to_string()));
        assert_eq!(
            output_path(&args),
            Some(PathBuf::from("out/translations.txt"))
        );
    }

    #[test]
    fn test_output_path_synthesized() {
        let mut args = base_args();
        args.output = Some(None);
        args.format = OutputFormat::Android;
        assert_eq!(output_path(&args), Some(PathBuf::from("myapp-fr.xml")));
    }

    #[test]
    fn test_parse_culture() {
        assert!(parse_culture("pt-br").is_ok());
        assert!(parse_culture("portuguese").is_err());
    }

    #[test]
    fn test_parse_version() {
        assert!(parse_version("1.0").is_ok());
        assert!(parse_version("one").is_err());
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("IOS").unwrap(), OutputFormat::Ios);
        assert!(parse_format("yaml").is_err());
    }
}
