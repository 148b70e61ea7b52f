use super::descriptor::Filter;

/// Indices of the square ring at Chebyshev distance `d` from the
/// center, in clockwise order starting at the top-left corner.
fn ring_indices(size: usize, d: usize) -> Vec<usize> {
    let c = size / 2;
    let (top, bottom) = (c - d, c + d);
    let (left, right) = (c - d, c + d);

    let mut ring = Vec::with_capacity(8 * d);
    for x in left..right {
        ring.push(top * size + x);
    }
    for y in top..bottom {
        ring.push(y * size + right);
    }
    for x in ((left + 1)..=right).rev() {
        ring.push(bottom * size + x);
    }
    for y in ((top + 1)..=bottom).rev() {
        ring.push(y * size + left);
    }
    ring
}

/// The index permutation of one 45 degree clockwise kernel rotation:
/// `rotated[i] = kernel[perm[i]]`.
///
/// The permutation is derived from the ring geometry of the square
/// grid: the ring at Chebyshev distance `d` holds `8d` cells, so one
/// eighth of a turn advances its values by `d` positions. Eight
/// applications therefore restore every ring, for any supported size.
pub fn rotation_permutation(size: usize) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..size * size).collect();
    for d in 1..=(size / 2) {
        let ring = ring_indices(size, d);
        let n = ring.len();
        for (k, &cell) in ring.iter().enumerate() {
            perm[cell] = ring[(k + n - d) % n];
        }
    }
    perm
}

/// Rotate a filter kernel by 45 degrees clockwise.
///
/// The rotated filter keeps the size and divisor of the input. Applying
/// the rotation eight times returns the original kernel.
///
/// # Examples
///
/// ```
/// use edgekit_imgproc::filter::{presets, rotate};
///
/// let sobel = presets::sobel();
/// let diagonal = rotate(&sobel);
/// assert_eq!(diagonal.size(), sobel.size());
/// assert_eq!(diagonal.divisor(), sobel.divisor());
/// ```
pub fn rotate(filter: &Filter) -> Filter {
    let perm = rotation_permutation(filter.size);
    let kernel = perm.iter().map(|&i| filter.kernel[i]).collect();

    Filter {
        size: filter.size,
        kernel,
        divisor: filter.divisor,
    }
}
