use std::fmt;

use crate::args::FillMode;
use crate::error::SubstituteError;

/// Where a marker occurrence sits among all occurrences of the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    /// 1-based, left to right.
    pub position: usize,
    pub total: usize,
}

/// What produced a variant, kept so failures can be traced back to a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantSource {
    /// The template replayed without substitution.
    Template,
    Payload {
        /// 1-based line of the payload in the wordlist.
        index: usize,
        value: String,
        occurrence: Option<Occurrence>,
    },
}

/// One concrete raw request ready for parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// 1-based position in the generated sequence.
    pub index: usize,
    pub source: VariantSource,
    pub raw: String,
}

impl Variant {
    #[must_use]
    pub fn replay(template: &str) -> Self {
        Self {
            index: 1,
            source: VariantSource::Template,
            raw: template.to_owned(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[#{}] ", self.index)?;
        match &self.source {
            VariantSource::Template => f.write_str("template"),
            VariantSource::Payload {
                index,
                value,
                occurrence,
            } => {
                write!(f, "payload {} {:?}", index, value)?;
                if let Some(occurrence) = occurrence {
                    write!(f, " occurrence {}/{}", occurrence.position, occurrence.total)?;
                }
                Ok(())
            }
        }
    }
}

/// Byte offsets of every non-overlapping occurrence of `marker`, left to right.
#[must_use]
pub fn occurrences(template: &str, marker: &str) -> Vec<usize> {
    if marker.is_empty() {
        return Vec::new();
    }
    template
        .match_indices(marker)
        .map(|(offset, _)| offset)
        .collect()
}

/// Which occurrences receive the payload; the rest are blanked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Every,
    /// 0-based index into the offset list.
    Only(usize),
}

/// Rebuilds `template` with the marker at each offset replaced according to `fill`.
#[must_use]
pub fn fill(
    template: &str,
    marker_len: usize,
    offsets: &[usize],
    target: Fill,
    payload: &str,
) -> String {
    let mut output = String::with_capacity(template.len().saturating_add(payload.len()));
    let mut cursor = 0usize;
    for (position, &offset) in offsets.iter().enumerate() {
        output.push_str(template.get(cursor..offset).unwrap_or_default());
        let selected = match target {
            Fill::Every => true,
            Fill::Only(chosen) => chosen == position,
        };
        if selected {
            output.push_str(payload);
        }
        cursor = offset.saturating_add(marker_len);
    }
    output.push_str(template.get(cursor..).unwrap_or_default());
    output
}

/// Lazily generated variants of one template.
///
/// Sequential mode yields `payloads x occurrences` variants, grouped by
/// payload and then by occurrence. Simultaneous mode yields one per payload.
#[derive(Debug, Clone)]
pub struct Expansion<'src> {
    template: &'src str,
    marker_len: usize,
    offsets: Vec<usize>,
    payloads: &'src [String],
    mode: FillMode,
    next: usize,
    total: usize,
}

impl Expansion<'_> {
    #[must_use]
    pub fn occurrence_count(&self) -> usize {
        self.offsets.len()
    }

    fn locate(&self, index: usize) -> Option<(usize, Fill)> {
        match self.mode {
            FillMode::Simultaneous => Some((index, Fill::Every)),
            FillMode::Sequential => {
                let count = self.offsets.len();
                Some((index.checked_div(count)?, Fill::Only(index.checked_rem(count)?)))
            }
        }
    }
}

impl Iterator for Expansion<'_> {
    type Item = Variant;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let index = self.next;
        self.next = self.next.saturating_add(1);

        let (payload_index, target) = self.locate(index)?;
        let payload = self.payloads.get(payload_index)?;
        let occurrence = match target {
            Fill::Every => None,
            Fill::Only(position) => Some(Occurrence {
                position: position.saturating_add(1),
                total: self.offsets.len(),
            }),
        };

        Some(Variant {
            index: index.saturating_add(1),
            source: VariantSource::Payload {
                index: payload_index.saturating_add(1),
                value: payload.clone(),
                occurrence,
            },
            raw: fill(self.template, self.marker_len, &self.offsets, target, payload),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Expansion<'_> {}

/// Plans the substitution of `payloads` into every `marker` of `template`.
///
/// # Errors
///
/// Returns [`SubstituteError::InvalidMarker`] when `marker` is empty.
pub fn expand<'src>(
    template: &'src str,
    marker: &str,
    payloads: &'src [String],
    mode: FillMode,
) -> Result<Expansion<'src>, SubstituteError> {
    if marker.is_empty() {
        return Err(SubstituteError::InvalidMarker);
    }
    let offsets = occurrences(template, marker);
    let total = match mode {
        FillMode::Simultaneous => payloads.len(),
        FillMode::Sequential => payloads.len().saturating_mul(offsets.len()),
    };
    Ok(Expansion {
        template,
        marker_len: marker.len(),
        offsets,
        payloads,
        mode,
        next: 0,
        total,
    })
}
