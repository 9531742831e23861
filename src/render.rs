//! HTML output writer.
//!
//! String-backed buffer with block tag helpers, pre-sized to ~1.25x the
//! input length (the typical HTML expansion factor).

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use md2html::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(100);
/// writer.paragraph_start();
/// writer.write_string("Hello");
/// writer.paragraph_end();
/// assert_eq!(writer.into_string(), "<p>Hello</p>");
/// ```
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 4),
        }
    }

    /// Create a writer that appends to an existing buffer.
    #[inline]
    pub fn from_buffer(out: String) -> Self {
        Self { out }
    }

    /// Write a static string (compile-time known).
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.push_str(s);
    }

    /// Write a dynamic string without escaping.
    #[inline]
    pub fn write_string(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Write paragraph start: `<p>`
    #[inline]
    pub fn paragraph_start(&mut self) {
        self.write_str("<p>");
    }

    /// Write paragraph end: `</p>`
    #[inline]
    pub fn paragraph_end(&mut self) {
        self.write_str("</p>");
    }

    /// Write heading start: `<hN>`
    ///
    /// Levels are unclamped; 7 and above produce a literal `<h7>`, `<h8>`
    /// and so on.
    #[inline]
    pub fn heading_start(&mut self, level: u32) {
        self.write_str("<h");
        self.push_level(level);
        self.out.push('>');
    }

    /// Write heading end: `</hN>`
    #[inline]
    pub fn heading_end(&mut self, level: u32) {
        self.write_str("</h");
        self.push_level(level);
        self.out.push('>');
    }

    fn push_level(&mut self, level: u32) {
        if level < 10 {
            self.out.push((b'0' + level as u8) as char);
            return;
        }
        let mut buf = [0u8; 10];
        let mut i = buf.len();
        let mut n = level;
        while n > 0 {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }
        for &digit in &buf[i..] {
            self.out.push(digit as char);
        }
    }

    /// Current output length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership of the output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}
