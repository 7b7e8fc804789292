/*!
 * In-memory transcript assembled from the segments of each source file.
 */

/// Segments contributed by one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSection {
    /// File name used in the header line
    pub source_name: String,
    pub segments: Vec<String>,
}

/// Combined transcript of a run
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    sections: Vec<TranscriptSection>,
    include_headers: bool,
}

impl Transcript {
    pub fn new(include_headers: bool) -> Self {
        Self {
            sections: Vec::new(),
            include_headers,
        }
    }

    /// Append a file's segments. Files without segments contribute nothing.
    pub fn push_file(&mut self, source_name: impl Into<String>, segments: Vec<String>) {
        if segments.is_empty() {
            return;
        }
        self.sections.push(TranscriptSection {
            source_name: source_name.into(),
            segments,
        });
    }

    pub fn sections(&self) -> &[TranscriptSection] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.sections.iter().map(|s| s.segments.len()).sum()
    }

    /// Header line for a source file
    pub fn header_line(source_name: &str) -> String {
        format!("=== {} ===", source_name)
    }

    /// Output lines in order, blank separators included
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for section in &self.sections {
            if self.include_headers {
                lines.push(Self::header_line(&section.source_name));
            }
            lines.extend(section.segments.iter().cloned());
            if self.include_headers {
                lines.push(String::new());
            }
        }
        lines
    }

    /// Render the transcript as newline-terminated text
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in self.lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Lines of the rendered output that are not blank
    pub fn non_blank_line_count(&self) -> usize {
        self.lines().iter().filter(|line| !line.trim().is_empty()).count()
    }
}
