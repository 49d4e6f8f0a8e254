use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{GeneratorPaths, LocaleConfig};
use crate::error::{GenerateError, Result};
use crate::model::payload::{LocaleLabels, Payload};
use crate::services::labels::LabelAssembler;
use crate::services::xcstrings::LocalizationTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub locales: usize,
    pub written: bool,
}

/// Builds label sets for every configured locale, in configured order.
pub fn build(
    config: &LocaleConfig,
    table: &LocalizationTable,
    metadata_root: &Path,
) -> Result<Payload> {
    let assembler = LabelAssembler {
        config,
        table,
        metadata_root,
    };

    let mut labels = LocaleLabels::with_capacity(config.website_locales.len());
    for &locale in config.website_locales {
        labels.push(locale, assembler.assemble(locale)?);
    }

    Ok(Payload {
        default_locale: config.default_locale.to_string(),
        available_locales: config.website_locales.iter().map(|s| s.to_string()).collect(),
        rtl_locales: config.sorted_rtl_locales(),
        app_store_url: config.app_store_url.to_string(),
        updated_at: config.updated_at.to_string(),
        labels,
    })
}

/// Two-space indented JSON, UTF-8 kept literal, trailing newline.
pub fn render(payload: &Payload) -> Result<String> {
    let mut json = serde_json::to_string_pretty(payload)?;
    json.push('\n');
    Ok(json)
}

/// Loads every input, renders the payload and, unless `dry_run`, writes it.
///
/// Nothing touches the output path until the whole payload is rendered.
pub fn generate(
    paths: &GeneratorPaths,
    config: &LocaleConfig,
    dry_run: bool,
) -> Result<GenerateReport> {
    let table = LocalizationTable::load(&paths.xcstrings)?;
    tracing::debug!(
        path = %paths.xcstrings.display(),
        keys = table.len(),
        "loaded string catalog"
    );

    let payload = build(config, &table, &paths.metadata_root)?;
    let json = render(&payload)?;

    if !dry_run {
        write_atomic(&paths.output, json.as_bytes())?;
    }

    Ok(GenerateReport {
        output: paths.output.clone(),
        locales: payload.labels.len(),
        written: !dry_run,
    })
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = tmp_path(path);

    if let Some(parent) = tmp.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| GenerateError::io(parent, e))?;
        }
    }

    fs::write(&tmp, bytes).map_err(|e| GenerateError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| GenerateError::io(path, e))?;

    Ok(())
}

// `translations.json` -> `translations.json.tmp`, next to the target.
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
