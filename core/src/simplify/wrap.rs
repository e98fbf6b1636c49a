/// Splits long statements into continuation lines.
///
/// A statement longer than `width - 1` characters is cut into chunks of
/// `width - 1` characters, each followed by the continuation marker; every
/// continuation line starts with the marker. Stripping the markers again gives
/// back the statement unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineWrapper {
    width: usize,
    marker: char,
}

impl Default for LineWrapper {
    fn default() -> Self {
        Self {
            width: 79,
            marker: '&',
        }
    }
}

impl LineWrapper {
    /// `width` counts the trailing marker and must leave room for at least one
    /// character of the statement.
    pub fn new(width: usize, marker: char) -> Self {
        Self {
            width: width.max(2),
            marker,
        }
    }

    /// Number of statement characters carried by each line.
    pub fn chunk_len(&self) -> usize {
        self.width - 1
    }

    pub fn wrap(&self, statement: &str) -> Vec<String> {
        let chars = statement.chars().collect::<Vec<_>>();
        let chunk_len = self.chunk_len();

        if chars.len() <= chunk_len {
            return vec![statement.to_owned()];
        }

        let n_chunks = chars.len().div_ceil(chunk_len);
        chars
            .chunks(chunk_len)
            .enumerate()
            .map(|(index, chunk)| {
                let mut line = String::with_capacity(self.width + 1);
                if index > 0 {
                    line.push(self.marker);
                }
                line.extend(chunk);
                if index + 1 < n_chunks {
                    line.push(self.marker);
                }
                line
            })
            .collect()
    }

    /// Inverse of [`LineWrapper::wrap`].
    pub fn unwrap(&self, lines: &[String]) -> String {
        let last = lines.len().saturating_sub(1);
        let mut statement = String::new();

        for (index, line) in lines.iter().enumerate() {
            let mut line = line.as_str();
            if index > 0 {
                line = line.strip_prefix(self.marker).unwrap_or(line);
            }
            if index < last {
                line = line.strip_suffix(self.marker).unwrap_or(line);
            }
            statement.push_str(line);
        }

        statement
    }
}
