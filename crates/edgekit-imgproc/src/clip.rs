//! Cohen-Sutherland line clipping against an axis-aligned rectangle.

/// Point is left of the rectangle (`x < xmin`).
pub const LEFT: u8 = 1;
/// Point is right of the rectangle (`x > xmax`).
pub const RIGHT: u8 = 2;
/// Point is below the rectangle (`y < ymin`).
pub const BOTTOM: u8 = 4;
/// Point is above the rectangle (`y > ymax`).
pub const TOP: u8 = 8;

/// Region code of a point relative to `[xmin, xmax] x [ymin, ymax]`.
///
/// Zero means the point lies inside (boundary included).
pub fn outcode(x: f64, y: f64, xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> u8 {
    let mut code = 0;
    if x < xmin {
        code |= LEFT;
    } else if x > xmax {
        code |= RIGHT;
    }
    if y < ymin {
        code |= BOTTOM;
    } else if y > ymax {
        code |= TOP;
    }
    code
}

/// Clip the segment `p0 -> p1` to the rectangle `[xmin, xmax] x [ymin, ymax]`.
///
/// Returns the clipped endpoints, or `None` when no part of the segment
/// is inside the rectangle. Both endpoints are unchanged when the
/// segment is already fully inside.
///
/// # Examples
///
/// ```
/// use edgekit_imgproc::clip::clip_line;
///
/// let clipped = clip_line((-5.0, 5.0), (15.0, 5.0), 0.0, 10.0, 0.0, 10.0);
/// assert_eq!(clipped, Some(((0.0, 5.0), (10.0, 5.0))));
///
/// assert!(clip_line((-5.0, 1.0), (-1.0, 9.0), 0.0, 10.0, 0.0, 10.0).is_none());
/// ```
pub fn clip_line(
    p0: (f64, f64),
    p1: (f64, f64),
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
) -> Option<((f64, f64), (f64, f64))> {
    let (mut x0, mut y0) = p0;
    let (mut x1, mut y1) = p1;
    let mut code0 = outcode(x0, y0, xmin, xmax, ymin, ymax);
    let mut code1 = outcode(x1, y1, xmin, xmax, ymin, ymax);

    loop {
        if code0 | code1 == 0 {
            return Some(((x0, y0), (x1, y1)));
        }
        if code0 & code1 != 0 {
            return None;
        }

        // One endpoint is outside; slide it to the rectangle edge it
        // violates and recompute its code.
        let out = if code0 != 0 { code0 } else { code1 };
        let (x, y) = if out & TOP != 0 {
            (x0 + (x1 - x0) * (ymax - y0) / (y1 - y0), ymax)
        } else if out & BOTTOM != 0 {
            (x0 + (x1 - x0) * (ymin - y0) / (y1 - y0), ymin)
        } else if out & RIGHT != 0 {
            (xmax, y0 + (y1 - y0) * (xmax - x0) / (x1 - x0))
        } else {
            (xmin, y0 + (y1 - y0) * (xmin - x0) / (x1 - x0))
        };

        if out == code0 {
            (x0, y0) = (x, y);
            code0 = outcode(x0, y0, xmin, xmax, ymin, ymax);
        } else {
            (x1, y1) = (x, y);
            code1 = outcode(x1, y1, xmin, xmax, ymin, ymax);
        }
    }
}
