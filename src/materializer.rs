use crate::aggregator::{Highlight, HighlightsMap};
use crate::error::{ClippingsError, Result};
use crate::title::TitleInfo;
use std::collections::{BTreeMap, BTreeSet};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Name of the JSON index written at the output root.
pub const INDEX_FILE_NAME: &str = "clippings.json";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Configuration for generated output
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Root directory for the index and the per-author directories
    pub output_dir: PathBuf,
    /// Whether to write a `Page <N>` line before each highlight
    pub pages: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            pages: true,
        }
    }
}

/// What a materialization run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeSummary {
    pub index_path: PathBuf,
    pub author_dirs: usize,
    pub files_written: usize,
}

/// Location of the text file for a title: `<output_dir>/<author>/<book>.txt`.
pub fn title_file_path(output_dir: &Path, title: &str) -> PathBuf {
    let TitleInfo { book, author } = TitleInfo::from_title(title);
    output_dir
        .join(path_component(&author))
        .join(format!("{}.txt", path_component(&book)))
}

/// Make a single path component out of a book or author name.
///
/// Separators and NUL become `_`, as do names that would resolve outside
/// their parent (`.`, `..`, empty).
pub fn path_component(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            other => other,
        })
        .collect();

    match cleaned.as_str() {
        "" | "." | ".." => "_".to_string(),
        _ => cleaned,
    }
}

/// Render the text file body for one title.
///
/// Title, blank line, then per highlight an optional `Page <N>` line, the
/// text and a blank line. Highlights without a page never get a page line.
pub fn render_title_file(title: &str, highlights: &[Highlight], pages: bool) -> String {
    let capacity = title.len()
        + highlights
            .iter()
            .map(|h| h.text.len() + 16)
            .sum::<usize>();
    let mut out = String::with_capacity(capacity);

    out.push_str(title);
    out.push_str(LINE_ENDING);
    out.push_str(LINE_ENDING);

    for highlight in highlights {
        if pages {
            if let Some(page) = highlight.page {
                out.push_str(&format!("Page {page}"));
                out.push_str(LINE_ENDING);
            }
        }
        out.push_str(&highlight.text);
        out.push_str(LINE_ENDING);
        out.push_str(LINE_ENDING);
    }

    out
}

/// Write the JSON index and one text file per title under `config.output_dir`.
///
/// All author directories are created before any title file is written; the
/// title files are then written by independent tasks, one per target path,
/// that are all awaited before returning. The first failure aborts the run.
pub async fn materialize(map: &HighlightsMap, config: &OutputConfig) -> Result<MaterializeSummary> {
    let root = &config.output_dir;

    fs::create_dir_all(root)
        .await
        .map_err(|e| ClippingsError::write_failure(root, e))?;

    let targets = group_by_target(map, root);

    let author_dirs: BTreeSet<PathBuf> = targets
        .keys()
        .filter_map(|path| path.parent().map(Path::to_path_buf))
        .collect();

    for dir in &author_dirs {
        debug!("Ensuring author directory {}", dir.display());
        fs::create_dir_all(dir)
            .await
            .map_err(|e| ClippingsError::write_failure(dir, e))?;
    }

    let index_path = write_index(map, root).await?;

    let mut tasks = JoinSet::new();
    for (path, (title, highlights)) in targets {
        let body = render_title_file(title, highlights, config.pages);
        tasks.spawn(async move { write_title_file(path, body).await });
    }

    let mut files_written = 0;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(path)) => {
                debug!("Wrote {}", path.display());
                files_written += 1;
            }
            Ok(Err(e)) => {
                warn!("Aborting output generation: {}", e);
                tasks.abort_all();
                return Err(e);
            }
            Err(join_error) => {
                tasks.abort_all();
                return Err(ClippingsError::TaskFailed(join_error.to_string()));
            }
        }
    }

    info!(
        "Wrote {} and {} title files across {} author directories",
        index_path.display(),
        files_written,
        author_dirs.len()
    );

    Ok(MaterializeSummary {
        index_path,
        author_dirs: author_dirs.len(),
        files_written,
    })
}

/// One entry per target file. Titles that decompose to the same path collapse
/// onto the last one in map order, so no two tasks ever write the same file.
fn group_by_target<'a>(
    map: &'a HighlightsMap,
    root: &Path,
) -> BTreeMap<PathBuf, (&'a str, &'a [Highlight])> {
    let mut targets = BTreeMap::new();
    for (title, highlights) in map.iter() {
        let path = title_file_path(root, title);
        if let Some((previous, _)) = targets.insert(path.clone(), (title, highlights)) {
            warn!("{:?} and {:?} share {}; keeping {:?}", previous, title, path.display(), title);
        }
    }
    targets
}

async fn write_index(map: &HighlightsMap, root: &Path) -> Result<PathBuf> {
    let index_path = root.join(INDEX_FILE_NAME);
    let mut json = serde_json::to_string_pretty(map)?;
    json.push('\n');

    fs::write(&index_path, json)
        .await
        .map_err(|e| ClippingsError::write_failure(&index_path, e))?;

    Ok(index_path)
}

/// Replace whatever is at `path` with `body`.
async fn write_title_file(path: PathBuf, body: String) -> Result<PathBuf> {
    match fs::remove_file(&path).await {
        Ok(()) => debug!("Removed stale {}", path.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(ClippingsError::write_failure(path, e)),
    }

    let file = fs::File::create(&path)
        .await
        .map_err(|e| ClippingsError::write_failure(&path, e))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(body.as_bytes())
        .await
        .map_err(|e| ClippingsError::write_failure(&path, e))?;
    writer
        .flush()
        .await
        .map_err(|e| ClippingsError::write_failure(&path, e))?;

    Ok(path)
}
