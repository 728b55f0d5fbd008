//! Results sink: where discoveries go.
//!
//! The search reports the rule table once, then one [`Discovery`] per newly
//! seen pattern or word, in non-decreasing depth order. A sink has no other
//! contract: it cannot fail the search and cannot influence it.
//!
//! # Example
//!
//! ```
//! use fws_search::{Discovery, DiscoverySink, Pattern};
//!
//! let mut events: Vec<Discovery> = Vec::new();
//! events.on_discovery(Discovery::Pattern { depth: 1, pattern: Pattern::new([[0, 1], [1, 2]]) });
//! assert_eq!(events[0].to_string(), "Depth 1: First occurrence of pattern 0,1/1,2");
//! ```

use core::fmt;
use std::io::{self, Write};

use crate::grid::{Pattern, Word};
use crate::rules::RuleTable;

/// Number of substitution steps before a pattern or word is first observed.
/// The seed pattern sits at depth 1.
pub type Depth = u32;

/// A first occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Discovery {
    /// A 2×2 pattern seen for the first time.
    Pattern {
        /// Minimal depth.
        depth: Depth,
        /// The pattern.
        pattern: Pattern,
    },
    /// A 3-symbol word seen for the first time.
    Word {
        /// Minimal depth.
        depth: Depth,
        /// The word.
        word: Word,
    },
}

impl Discovery {
    /// Depth of first occurrence.
    #[inline]
    pub const fn depth(&self) -> Depth {
        match self {
            Discovery::Pattern { depth, .. } | Discovery::Word { depth, .. } => *depth,
        }
    }

    /// Whether this is a pattern discovery.
    #[inline]
    pub const fn is_pattern(&self) -> bool {
        matches!(self, Discovery::Pattern { .. })
    }
}

impl fmt::Display for Discovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discovery::Pattern { depth, pattern } => {
                write!(f, "Depth {}: First occurrence of pattern {}", depth, pattern)
            }
            Discovery::Word { depth, word } => {
                write!(f, "Depth {}: First occurrence of word {}", depth, word)
            }
        }
    }
}

/// Receiver of search results.
pub trait DiscoverySink {
    /// Called once with the rule table before any discovery.
    fn on_rules(&mut self, _table: &RuleTable) {}

    /// Called once per first occurrence.
    fn on_discovery(&mut self, discovery: Discovery);
}

impl DiscoverySink for Vec<Discovery> {
    fn on_discovery(&mut self, discovery: Discovery) {
        self.push(discovery);
    }
}

/// Discard everything.
impl DiscoverySink for () {
    fn on_discovery(&mut self, _discovery: Discovery) {}
}

impl<S: DiscoverySink + ?Sized> DiscoverySink for &mut S {
    fn on_rules(&mut self, table: &RuleTable) {
        (**self).on_rules(table);
    }

    fn on_discovery(&mut self, discovery: Discovery) {
        (**self).on_discovery(discovery);
    }
}

/// Fan out to two sinks.
impl<A: DiscoverySink, B: DiscoverySink> DiscoverySink for (A, B) {
    fn on_rules(&mut self, table: &RuleTable) {
        self.0.on_rules(table);
        self.1.on_rules(table);
    }

    fn on_discovery(&mut self, discovery: Discovery) {
        self.0.on_discovery(discovery);
        self.1.on_discovery(discovery);
    }
}

/// Output format of a [`WriterSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Start: ..`, `Rule: i -> ..`, `Depth d: First occurrence of ..` lines.
    #[default]
    Text,
    /// One JSON object per line.
    #[cfg(feature = "serde")]
    Json,
}

/// Sink that writes every event to an [`io::Write`].
///
/// The first I/O error is kept and every later event is dropped; call
/// [`WriterSink::finish`] to retrieve it.
pub struct WriterSink<W: Write> {
    out: W,
    format: OutputFormat,
    error: Option<io::Error>,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            error: None,
        }
    }

    /// Flush and return the writer.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while writing, or the flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, write: impl FnOnce(&mut W, OutputFormat) -> io::Result<()>) {
        if self.error.is_none() {
            if let Err(e) = write(&mut self.out, self.format) {
                self.error = Some(e);
            }
        }
    }
}

fn write_rules<W: Write>(out: &mut W, format: OutputFormat, table: &RuleTable) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Start: {}", table.start())?;
            for (symbol, image) in table.iter() {
                writeln!(out, "Rule: {} -> {}", symbol, image)?;
            }
            writeln!(out)
        }
        #[cfg(feature = "serde")]
        OutputFormat::Json => {
            let rules: Vec<_> = table.iter().map(|(_, image)| image).collect();
            let line = serde_json_line(&RulesRecord {
                kind: "rules",
                params: table.params(),
                start: table.start(),
                rules: &rules,
            })?;
            writeln!(out, "{}", line)
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct RulesRecord<'a> {
    kind: &'static str,
    params: &'a crate::params::Params,
    start: Pattern,
    rules: &'a [Pattern],
}

#[cfg(feature = "serde")]
fn serde_json_line<T: serde::Serialize>(value: &T) -> io::Result<String> {
    serde_json::to_string(value).map_err(io::Error::from)
}

impl<W: Write> DiscoverySink for WriterSink<W> {
    fn on_rules(&mut self, table: &RuleTable) {
        self.emit(|out, format| write_rules(out, format, table));
    }

    fn on_discovery(&mut self, discovery: Discovery) {
        self.emit(|out, format| match format {
            OutputFormat::Text => writeln!(out, "{}", discovery),
            #[cfg(feature = "serde")]
            OutputFormat::Json => writeln!(out, "{}", serde_json_line(&discovery)?),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Params;

    #[test]
    fn text_lines() {
        let w = Discovery::Word {
            depth: 211,
            word: Word::new([8, 2, 9]),
        };
        assert_eq!(w.to_string(), "Depth 211: First occurrence of word 8 2 9");
        assert_eq!(w.depth(), 211);
        assert!(!w.is_pattern());
    }

    #[test]
    fn writer_sink_dumps_rules_first() {
        let table = RuleTable::build(&Params::DEFAULT);
        let mut sink = WriterSink::new(Vec::new(), OutputFormat::Text);
        sink.on_rules(&table);
        sink.on_discovery(Discovery::Pattern {
            depth: 1,
            pattern: table.start(),
        });
        let text = String::from_utf8(sink.finish().unwrap()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Start: 0,1/1,2");
        assert_eq!(lines[1], "Rule: 0 -> 0,0/0,0");
        assert_eq!(lines[6], "Rule: 5 -> 1,6/6,0");
        assert_eq!(lines[10], "Rule: 9 -> 0,0/0,0");
        assert_eq!(lines[11], "");
        assert_eq!(lines[12], "Depth 1: First occurrence of pattern 0,1/1,2");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn writer_sink_json_lines() {
        let mut sink = WriterSink::new(Vec::new(), OutputFormat::Json);
        sink.on_discovery(Discovery::Word {
            depth: 3,
            word: Word::new([1, 0, 2]),
        });
        let text = String::from_utf8(sink.finish().unwrap()).unwrap();
        assert_eq!(text, "{\"kind\":\"word\",\"depth\":3,\"word\":[1,0,2]}\n");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writer_sink_keeps_first_error() {
        let mut sink = WriterSink::new(Broken, OutputFormat::Text);
        sink.on_rules(&RuleTable::build(&Params::DEFAULT));
        sink.on_discovery(Discovery::Pattern {
            depth: 1,
            pattern: Pattern::ZERO,
        });
        let err = sink.finish().err().map(|e| e.kind());
        assert_eq!(err, Some(io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn tuple_fans_out() {
        let mut pair: (Vec<Discovery>, Vec<Discovery>) = (Vec::new(), Vec::new());
        pair.on_discovery(Discovery::Pattern {
            depth: 2,
            pattern: Pattern::ZERO,
        });
        assert_eq!(pair.0, pair.1);
        assert_eq!(pair.0.len(), 1);
    }
}
