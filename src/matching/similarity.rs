//! Edit-distance scoring between two free-text strings.
//!
//! Comparison is case-sensitive and works on Unicode scalar values; callers
//! lower-case both sides beforehand when they want case-insensitive matching.

/// Unit-cost Levenshtein distance (insertion, deletion, substitution).
///
/// Fills the whole dynamic-programming matrix, O(len(a)·len(b)) time and space.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Rows index `b`, columns index `a`.
    let mut matrix = vec![vec![0usize; a.len() + 1]; b.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=b.len() {
        for j in 1..=a.len() {
            matrix[i][j] = if b[i - 1] == a[j - 1] {
                matrix[i - 1][j - 1]
            } else {
                (matrix[i - 1][j - 1] + 1)
                    .min(matrix[i][j - 1] + 1)
                    .min(matrix[i - 1][j] + 1)
            };
        }
    }

    matrix[b.len()][a.len()]
}

/// Normalized similarity in [0, 1]: `(max_len - distance) / max_len`.
///
/// Two empty strings are identical and score `1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }

    let distance = edit_distance(a, b);
    (longest - distance) as f64 / longest as f64
}
