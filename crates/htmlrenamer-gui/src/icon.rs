//! HtmlRenamer application icon generator.
//!
//! Produces a procedural icon: a document page with a folded corner, a
//! highlighted heading line and a rename arrow sweeping across its lower
//! half. Rendered at any resolution as RGBA pixel data for the window icon
//! or for ICO generation.

/// Generate the icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    let rgba = render_icon(size);
    egui::IconData {
        rgba,
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    let (x0, y0, x1, y1) = (s * 0.18, s * 0.06, s * 0.78, s * 0.94);
    let fold = s * 0.18;

    let heading = (s * 0.28, s * 0.24, s * 0.60, s * 0.33);
    let lines: [(f32, f32, f32, f32); 3] = [
        (s * 0.28, s * 0.42, s * 0.68, s * 0.47),
        (s * 0.28, s * 0.53, s * 0.62, s * 0.58),
        (s * 0.28, s * 0.64, s * 0.52, s * 0.69),
    ];

    // Arrow: shaft from lower-left to the right edge, head at the end.
    let (a_x0, a_y0, a_x1, a_y1) = (s * 0.40, s * 0.82, s * 0.88, s * 0.82);
    let shaft_half = s * 0.035;
    let head_len = s * 0.14;
    let head_half = s * 0.11;

    const PAGE: [u8; 3] = [0xf4, 0xf1, 0xea];
    const FOLD: [u8; 3] = [0xd8, 0xd2, 0xc4];
    const HEADING: [u8; 3] = [0x4f, 0xc1, 0xb0];
    const TEXT: [u8; 3] = [0x6b, 0x78, 0x85];
    const ARROW: [u8; 3] = [0x7b, 0xcf, 0x7a];

    // ── Per-pixel rendering ─────────────────────────────────────
    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let mut c = [0u8; 3];
            let mut ca: f32 = 0.0;

            // 1. Page with the top-right corner cut off.
            let cut = ((px - (x1 - fold)) - (py - y0)) / std::f32::consts::SQRT_2;
            let page = box_coverage(px, py, x0, y0, x1, y1) * smooth_edge(cut, 0.0);
            over(&mut c, &mut ca, PAGE, page);

            // 2. Folded corner triangle.
            let in_fold = smooth_edge(-cut, 0.0)
                * smooth_edge(x1 - fold - px, 0.0)
                * smooth_edge(py - (y0 + fold), 0.0);
            over(&mut c, &mut ca, FOLD, in_fold);

            // 3. Heading and body text.
            let (hx0, hy0, hx1, hy1) = heading;
            over(&mut c, &mut ca, HEADING, box_coverage(px, py, hx0, hy0, hx1, hy1));
            for &(lx0, ly0, lx1, ly1) in &lines {
                over(&mut c, &mut ca, TEXT, box_coverage(px, py, lx0, ly0, lx1, ly1));
            }

            // 4. Rename arrow.
            let shaft_end = a_x1 - head_len * 0.6;
            let shaft = smooth_edge(point_to_seg_dist(px, py, a_x0, a_y0, shaft_end, a_y1), shaft_half);
            let head_base = a_x1 - head_len;
            let head = if px >= head_base - 1.0 && px <= a_x1 + 1.0 {
                let t = ((px - head_base) / head_len).clamp(0.0, 1.0);
                let half = head_half * (1.0 - t);
                smooth_edge((py - a_y0).abs(), half) * smooth_edge(px, a_x1)
            } else {
                0.0
            };
            over(&mut c, &mut ca, ARROW, shaft.max(head));

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx] = c[0];
            pixels[idx + 1] = c[1];
            pixels[idx + 2] = c[2];
            pixels[idx + 3] = (ca * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Composite `colour` with coverage `alpha` over the accumulated pixel.
fn over(c: &mut [u8; 3], ca: &mut f32, colour: [u8; 3], alpha: f32) {
    if alpha <= 0.0 {
        return;
    }
    for (dst, src) in c.iter_mut().zip(colour) {
        *dst = lerp_c(*dst, src, alpha);
    }
    *ca += (1.0 - *ca) * alpha;
}

/// Smooth anti-aliased edge (1 → 0 as `dist` crosses `edge`).
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -1.0 {
        1.0
    } else if d > 1.0 {
        0.0
    } else {
        0.5 - d * 0.5
    }
}

/// Anti-aliased coverage of an axis-aligned box.
fn box_coverage(px: f32, py: f32, x0: f32, y0: f32, x1: f32, y1: f32) -> f32 {
    let outside = (x0 - px).max(px - x1).max(y0 - py).max(py - y1);
    smooth_edge(outside, 0.0)
}

/// Perpendicular distance from a point to a line segment.
fn point_to_seg_dist(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let abx = bx - ax;
    let aby = by - ay;
    let len_sq = abx * abx + aby * aby;
    if len_sq < 0.0001 {
        return ((px - ax).powi(2) + (py - ay).powi(2)).sqrt();
    }
    let t = (((px - ax) * abx + (py - ay) * aby) / len_sq).clamp(0.0, 1.0);
    let proj_x = ax + t * abx;
    let proj_y = ay + t * aby;
    ((px - proj_x).powi(2) + (py - proj_y).powi(2)).sqrt()
}

/// Linear interpolation for a single colour channel.
fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}
