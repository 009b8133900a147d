use crate::choices::IdeKind;
use crate::error::{QuizError, QuizResult};
use crate::shortcuts::ide::Ide;
use scraper::{Html, Selector};
use std::path::Path;
use tracing::{debug, info, warn};

/// Fills an empty data folder with per-topic CSV files.
pub trait Fetcher {
    fn populate(&self, ide: &dyn Ide, target: &Path) -> QuizResult<()>;
}

/// Rows scraped for one topic, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRows {
    pub topic: String,
    pub rows: Vec<Vec<String>>,
}

pub type HtmlTable = Vec<Vec<String>>;

pub struct WebFetcher {
    client: reqwest::blocking::Client,
}

impl WebFetcher {
    pub fn new() -> QuizResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    fn download(&self, url: &str) -> QuizResult<String> {
        info!("🌐 Downloading {}", url);
        let resp = self.client.get(url).send()?.error_for_status()?;
        Ok(resp.text()?)
    }
}

impl Fetcher for WebFetcher {
    fn populate(&self, ide: &dyn Ide, target: &Path) -> QuizResult<()> {
        let html = self.download(ide.reference_url())?;
        let tables = extract_tables(&html)?;
        debug!("   -> {} tables on page", tables.len());

        let topics = match ide.kind() {
            IdeKind::IntelliJ => {
                let declared = ide.declared_topics().unwrap_or_default();
                split_by_declared(&tables, declared, ide.layout().width())?
            }
            IdeKind::AndroidStudio => {
                let table = tables
                    .last()
                    .ok_or_else(|| QuizError::Fetch("no tables on shortcut page".to_string()))?;
                split_by_topic_rows(table, ide.layout().width())
            }
        };

        if topics.is_empty() {
            return Err(QuizError::Fetch(format!(
                "no {} topics found on {}",
                ide.kind(),
                ide.reference_url()
            )));
        }

        let written = write_topic_files(target, ide.file_prefix(), ide.layout().width(), &topics)?;
        info!("💾 Wrote {} topic files to {}", written, target.display());
        Ok(())
    }
}

fn selector(css: &str) -> QuizResult<Selector> {
    Selector::parse(css).map_err(|e| QuizError::Fetch(format!("bad selector '{}': {}", css, e)))
}

fn cell_text(cell: scraper::ElementRef) -> String {
    cell.text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cell text repeated once per spanned column.
fn expand_cell(cell: scraper::ElementRef) -> impl Iterator<Item = String> {
    let span = cell
        .value()
        .attr("colspan")
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(1);
    std::iter::repeat(cell_text(cell)).take(span)
}

/// Every `<table>` on the page as rows of cell text, with `colspan` cells repeated across
/// the columns they cover. Header-only rows (`<th>` cells) are dropped.
pub fn extract_tables(html: &str) -> QuizResult<Vec<HtmlTable>> {
    let doc = Html::parse_document(html);
    let table_sel = selector("table")?;
    let row_sel = selector("tr")?;
    let cell_sel = selector("td")?;

    let mut tables = Vec::new();
    for table in doc.select(&table_sel) {
        let rows: HtmlTable = table
            .select(&row_sel)
            .map(|tr| tr.select(&cell_sel).flat_map(expand_cell).collect::<Vec<_>>())
            .filter(|cells| !cells.is_empty())
            .collect();
        tables.push(rows);
    }
    Ok(tables)
}

fn keep_rows(topic: &str, rows: &[Vec<String>], width: usize) -> Vec<Vec<String>> {
    let kept: Vec<Vec<String>> = rows.iter().filter(|r| r.len() == width).cloned().collect();
    if kept.len() < rows.len() {
        warn!(
            "Dropped {} rows of '{}' without {} cells",
            rows.len() - kept.len(),
            topic,
            width
        );
    }
    kept
}

/// One table per declared topic, paired in page order. Counts must match exactly.
pub fn split_by_declared(
    tables: &[HtmlTable],
    declared: &[&str],
    width: usize,
) -> QuizResult<Vec<TopicRows>> {
    if tables.len() != declared.len() {
        return Err(QuizError::Fetch(format!(
            "page has {} tables but {} topics are declared",
            tables.len(),
            declared.len()
        )));
    }

    Ok(declared
        .iter()
        .zip(tables)
        .map(|(topic, rows)| TopicRows {
            topic: topic.to_string(),
            rows: keep_rows(topic, rows, width),
        })
        .collect())
}

/// Splits one combined table on section rows, i.e. full-width rows whose cells all hold the
/// same text. Rows before the first section row are discarded.
pub fn split_by_topic_rows(table: &[Vec<String>], width: usize) -> Vec<TopicRows> {
    let mut topics: Vec<TopicRows> = Vec::new();
    let mut pending: Vec<Vec<String>> = Vec::new();

    let flush = |topics: &mut Vec<TopicRows>, pending: &mut Vec<Vec<String>>| {
        if let Some(last) = topics.last_mut() {
            last.rows = keep_rows(&last.topic, pending, width);
        }
        pending.clear();
    };

    for row in table.iter().filter(|r| !r.is_empty()) {
        let is_section =
            row.len() == width && !row[0].is_empty() && row.iter().all(|c| c == &row[0]);
        if is_section {
            flush(&mut topics, &mut pending);
            topics.push(TopicRows {
                topic: row[0].clone(),
                rows: Vec::new(),
            });
        } else {
            pending.push(row.clone());
        }
    }
    flush(&mut topics, &mut pending);

    topics
}

/// Writes `<prefix>NN.csv` per topic; the first row repeats the topic name across all columns.
pub fn write_topic_files(
    dir: &Path,
    prefix: &str,
    width: usize,
    topics: &[TopicRows],
) -> QuizResult<usize> {
    for (i, topic) in topics.iter().enumerate() {
        let path = dir.join(format!("{}{:02}.csv", prefix, i));
        let mut wtr = csv::Writer::from_path(&path)?;
        wtr.write_record(std::iter::repeat(topic.topic.as_str()).take(width))?;
        for row in &topic.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        debug!("   -> {} ({} rows)", path.display(), topic.rows.len());
    }
    Ok(topics.len())
}
