//! Splits arbitrarily long text into bounded, ordered segments.

/// Default number of lines per chunk.
pub const DEFAULT_CHUNK_LINES: usize = 2000;

/// An ordered segment of a larger text. Indices start at 1 and follow the
/// order the segments appear in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub text: String,
}

/// Line-count based text splitter.
#[derive(Debug, Clone)]
pub struct Chunker {
    chunk_lines: usize,
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            chunk_lines: DEFAULT_CHUNK_LINES,
        }
    }
}

impl Chunker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lines-per-chunk limit. A non-positive value is rejected
    /// silently, keeping the previously configured value, so callers always
    /// have a usable setting.
    pub fn set_chunk_lines(&mut self, lines: usize) {
        if lines > 0 {
            self.chunk_lines = lines;
        }
    }

    pub fn chunk_lines(&self) -> usize {
        self.chunk_lines
    }

    /// Split `text` into chunks of exactly `chunk_lines` lines each, except
    /// possibly the last. A trailing partial segment is kept; an empty input
    /// produces no chunks at all.
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut line_count = 0;

        for line in text.lines() {
            current.push_str(line);
            current.push('\n');
            line_count += 1;

            if line_count >= self.chunk_lines {
                chunks.push(Chunk {
                    index: chunks.len() + 1,
                    text: std::mem::take(&mut current),
                });
                line_count = 0;
            }
        }

        if !current.is_empty() {
            chunks.push(Chunk {
                index: chunks.len() + 1,
                text: current,
            });
        }

        chunks
    }
}
