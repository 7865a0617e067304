use crate::compare::ComparisonResult;
use crate::error::Error;
use regex::{Captures, Regex};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static DEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<del>([^<]+)</del>").unwrap());

const RED: &str = "\x1b[1;31m";
const BLACK_ON_GREEN: &str = "\x1b[1;30;42m";
const BLACK_ON_YELLOW: &str = "\x1b[1;30;43m";
const RESET: &str = "\x1b[0m";
const STRIKE: char = '\u{336}';

/// Output formats understood by [`encode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Csv,
    Tsv,
    CompactJson,
    PrettyJson,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Format::Csv),
            "tsv" => Ok(Format::Tsv),
            "compact" => Ok(Format::CompactJson),
            "pretty" => Ok(Format::PrettyJson),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Csv => "csv",
            Format::Tsv => "tsv",
            Format::CompactJson => "compact",
            Format::PrettyJson => "pretty",
        };
        f.write_str(name)
    }
}

impl Format {
    fn delimiter(self) -> Option<u8> {
        match self {
            Format::Csv => Some(b','),
            Format::Tsv => Some(b'\t'),
            Format::CompactJson | Format::PrettyJson => None,
        }
    }
}

/// Column names matching the rows written by [`encode`].
pub fn csv_header() -> [&'static str; 6] {
    ["String1", "String2", "Tags1", "Tags2", "EditDistance", "Aborted"]
}

/// Header line for CSV and TSV output, `None` for JSON.
pub fn encode_header(format: Format) -> Option<Result<String, Error>> {
    format.delimiter().map(|d| encode_row(&csv_header(), d))
}

/// Turns the tags of a tagged string into terminal colors. Inserted text is
/// shown on green, substituted text on yellow, deleted text in red with every
/// character struck through.
///
/// ```
/// use fzdiff::presenter::term_colors;
///
/// assert_eq!(term_colors("He<subst>l</subst>lo"), "He\x1b[1;30;43ml\x1b[0mlo");
/// ```
pub fn term_colors(tagged: &str) -> String {
    let struck = DEL_RE.replace_all(tagged, |caps: &Captures| {
        let mut out = String::from("<del>");
        for c in caps[1].chars() {
            out.push(c);
            out.push(STRIKE);
        }
        out.push_str("</del>");
        out
    });
    struck
        .replace("<ins>", BLACK_ON_GREEN)
        .replace("</ins>", RESET)
        .replace("<del>", RED)
        .replace("</del>", RESET)
        .replace("<subst>", BLACK_ON_YELLOW)
        .replace("</subst>", RESET)
}

/// Copy of `result` with both tagged strings passed through [`term_colors`].
pub fn colorize(result: &ComparisonResult) -> ComparisonResult {
    ComparisonResult {
        tags1: term_colors(&result.tags1),
        tags2: term_colors(&result.tags2),
        ..result.clone()
    }
}

/// Encodes one comparison as a CSV/TSV row or a JSON document, without a
/// trailing newline.
///
/// ```
/// use fzdiff::compare::{compare, Config};
/// use fzdiff::presenter::{encode, Format};
///
/// let out = compare("Puma", "Poma", &Config::default());
/// assert_eq!(encode(&out, Format::Csv).unwrap(), "Puma,Poma,,,1,false");
/// assert_eq!(
///     encode(&out, Format::CompactJson).unwrap(),
///     r#"{"string1":"Puma","string2":"Poma","editDistance":1}"#
/// );
/// ```
pub fn encode(result: &ComparisonResult, format: Format) -> Result<String, Error> {
    match format {
        Format::CompactJson => Ok(serde_json::to_string(result)?),
        Format::PrettyJson => Ok(serde_json::to_string_pretty(result)?),
        Format::Csv | Format::Tsv => {
            let dist = result.edit_distance.to_string();
            let aborted = result.aborted.to_string();
            let row = [
                result.string1.as_str(),
                result.string2.as_str(),
                result.tags1.as_str(),
                result.tags2.as_str(),
                dist.as_str(),
                aborted.as_str(),
            ];
            // delimiter is always set for the separated formats
            encode_row(&row, format.delimiter().unwrap_or(b','))
        }
    }
}

fn encode_row(row: &[&str], delimiter: u8) -> Result<String, Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    wtr.write_record(row)?;
    let mut bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    String::from_utf8(bytes).map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
