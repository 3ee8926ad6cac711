//! Greedy merging of accepted pieces with overlap.

use crate::config::SplitterConfig;
use std::collections::VecDeque;

/// Merge `pieces` into chunks joined by `separator`.
///
/// Pieces are accumulated while `total + separator + next <= chunk_size`.
/// When the next piece does not fit, the current chunk is emitted and the
/// next one is seeded with the longest run of trailing pieces whose length
/// stays within `chunk_overlap` and still leaves room for the incoming
/// piece. Every piece is expected to measure less than `chunk_size`.
///
/// Lengths are summed per piece and per separator, so for additive
/// measures (characters, bytes) `total` is exact.
pub(crate) fn merge_splits(
    pieces: &[&str],
    separator: &str,
    config: &SplitterConfig,
) -> Vec<String> {
    let chunk_size = config.chunk_size();
    let chunk_overlap = config.chunk_overlap();
    let separator_len = if separator.is_empty() {
        0
    } else {
        config.measure(separator)
    };

    let mut chunks = Vec::new();
    let mut current: VecDeque<(&str, usize)> = VecDeque::new();
    let mut total = 0usize;

    for &piece in pieces {
        let len = config.measure(piece);
        let joined = if current.is_empty() { 0 } else { separator_len };

        if !current.is_empty() && total + joined + len > chunk_size {
            push_chunk(&mut chunks, &current, separator, config);

            // Keep a tail of the emitted chunk as overlap for the next one
            while let Some(&(_, front_len)) = current.front() {
                if total <= chunk_overlap && total + separator_len + len <= chunk_size {
                    break;
                }
                current.pop_front();
                total -= front_len;
                if !current.is_empty() {
                    total -= separator_len;
                }
            }

            // Overlap never starts with an empty piece
            while let Some(&("", front_len)) = current.front() {
                current.pop_front();
                total -= front_len;
                if !current.is_empty() {
                    total -= separator_len;
                }
            }
        }

        if !current.is_empty() {
            total += separator_len;
        }
        total += len;
        current.push_back((piece, len));
    }

    if !current.is_empty() {
        push_chunk(&mut chunks, &current, separator, config);
    }

    chunks
}

fn push_chunk(
    chunks: &mut Vec<String>,
    current: &VecDeque<(&str, usize)>,
    separator: &str,
    config: &SplitterConfig,
) {
    let text = join(current, separator);
    if text.is_empty() {
        return;
    }

    let measured = config.measure(&text);
    if measured > config.chunk_size() {
        tracing::warn!(
            "Created a chunk of length {}, which is longer than the configured chunk size {}",
            measured,
            config.chunk_size()
        );
    }

    chunks.push(text);
}

fn join(pieces: &VecDeque<(&str, usize)>, separator: &str) -> String {
    let mut text = String::new();
    for (i, (piece, _)) in pieces.iter().enumerate() {
        if i > 0 {
            text.push_str(separator);
        }
        text.push_str(piece);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(chunk_size: usize, chunk_overlap: usize) -> SplitterConfig {
        SplitterConfig::builder()
            .chunk_size(chunk_size)
            .chunk_overlap(chunk_overlap)
            .build()
            .unwrap()
    }

    #[test]
    fn test_merge_without_overlap() {
        let merged = merge_splits(&["AAAA", "BBBB", "CCCC"], "\n\n", &config(6, 0));
        assert_eq!(merged, vec!["AAAA", "BBBB", "CCCC"]);
    }

    #[test]
    fn test_merge_packs_greedily() {
        let merged = merge_splits(&["a", "b", "c", "d", "e"], " ", &config(5, 0));
        assert_eq!(merged, vec!["a b c", "d e"]);
    }

    #[test]
    fn test_merge_with_overlap() {
        let merged = merge_splits(&["a", "b", "c", "d", "e", "f"], " ", &config(5, 1));
        assert_eq!(merged, vec!["a b c", "c d e", "e f"]);
    }

    #[test]
    fn test_overlap_takes_longest_fitting_tail() {
        // Tail "b c" measures 3 and fits the overlap; "c" alone would too,
        // but the longer run is kept.
        let merged = merge_splits(&["aa", "b", "c", "dd", "e"], " ", &config(7, 3));
        assert_eq!(merged, vec!["aa b c", "b c dd", "dd e"]);
    }

    #[test]
    fn test_overlap_dropped_when_next_piece_needs_room() {
        let merged = merge_splits(&["one", "two", "three", "four"], " ", &config(8, 3));
        assert_eq!(merged, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_characters_merge_without_separator() {
        let pieces: Vec<&str> = vec!["a", "b", "c", "d", "e"];
        let merged = merge_splits(&pieces, "", &config(2, 0));
        assert_eq!(merged, vec!["ab", "cd", "e"]);
    }

    #[test]
    fn test_empty_pieces_never_emit_empty_chunks() {
        let merged = merge_splits(&["", ""], "\n\n", &config(1, 0));
        assert!(merged.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(merge_splits(&[], " ", &config(5, 0)).is_empty());
    }
}
