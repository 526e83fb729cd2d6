//! Build script -- generates the application icon and embeds Windows
//! application manifest and icon resource.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Generate icon if it does not already exist.
    let icon_path = "assets/icon.ico";
    if !std::path::Path::new(icon_path).exists() {
        std::fs::create_dir_all("assets").ok();
        if let Err(e) = std::fs::write(icon_path, generate_ico(&[64, 48, 32, 16])) {
            eprintln!("cargo:warning=Failed to write icon: {e}");
        }
    }

    // Only embed resources on Windows.
    if std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() == "windows" {
        let mut res = winresource::WindowsResource::new();
        res.set_manifest(
            r#"
<assembly xmlns="urn:schemas-microsoft-com:asm.v1" manifestVersion="1.0">
  <trustInfo xmlns="urn:schemas-microsoft-com:asm.v3">
    <security>
      <requestedPrivileges>
        <requestedExecutionLevel level="asInvoker" uiAccess="false"/>
      </requestedPrivileges>
    </security>
  </trustInfo>
  <compatibility xmlns="urn:schemas-microsoft-com:compatibility.v1">
    <application>
      <supportedOS Id="{8e0f7a12-bfb3-4fe8-b9a5-48fd50a15a9a}"/>
    </application>
  </compatibility>
  <application xmlns="urn:schemas-microsoft-com:asm.v3">
    <windowsSettings>
      <dpiAware xmlns="http://schemas.microsoft.com/SMI/2005/WindowsSettings">true/pm</dpiAware>
      <dpiAwareness xmlns="http://schemas.microsoft.com/SMI/2016/WindowsSettings">PerMonitorV2</dpiAwareness>
    </windowsSettings>
  </application>
</assembly>
"#,
        );

        if std::path::Path::new(icon_path).exists() {
            res.set_icon(icon_path);
        }

        if let Err(e) = res.compile() {
            eprintln!("cargo:warning=Failed to compile Windows resources: {e}");
        }
    }
}

// Icon rendering, kept free of workspace crate dependencies.

/// Assemble an ICO container holding one 32-bit bitmap per size.
fn generate_ico(sizes: &[u32]) -> Vec<u8> {
    let images: Vec<(u32, Vec<u8>)> = sizes
        .iter()
        .map(|&size| (size, ico_bitmap(&render_icon_rgba(size), size)))
        .collect();

    let mut out = Vec::new();
    put_u16(&mut out, 0); // reserved
    put_u16(&mut out, 1); // resource type: icon
    put_u16(&mut out, images.len() as u16);

    let mut data_offset = 6 + 16 * images.len() as u32;
    for (size, bmp) in &images {
        // A dimension byte of 0 means 256.
        let dim = u8::try_from(*size).unwrap_or(0);
        out.extend_from_slice(&[dim, dim, 0, 0]);
        put_u16(&mut out, 1); // colour planes
        put_u16(&mut out, 32); // bits per pixel
        put_u32(&mut out, bmp.len() as u32);
        put_u32(&mut out, data_offset);
        data_offset += bmp.len() as u32;
    }

    for (_, bmp) in images {
        out.extend(bmp);
    }
    out
}

/// One ICO image: BITMAPINFOHEADER, bottom-up BGRA rows, then the 1-bit
/// transparency mask.
fn ico_bitmap(rgba: &[u8], size: u32) -> Vec<u8> {
    let side = size as usize;
    let mask_stride = side.div_ceil(32) * 4;
    let mut bmp = Vec::with_capacity(40 + side * side * 4 + mask_stride * side);

    put_u32(&mut bmp, 40);
    put_u32(&mut bmp, size);
    put_u32(&mut bmp, size * 2); // colour rows plus mask rows
    put_u16(&mut bmp, 1);
    put_u16(&mut bmp, 32);
    // Compression, image size, resolution and palette fields all stay zero.
    bmp.extend_from_slice(&[0u8; 24]);

    let rows: Vec<&[u8]> = rgba.chunks_exact(side * 4).rev().collect();
    for row in &rows {
        for px in row.chunks_exact(4) {
            bmp.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
        }
    }
    for row in &rows {
        let mut mask = vec![0u8; mask_stride];
        for (x, px) in row.chunks_exact(4).enumerate() {
            if px[3] < 128 {
                mask[x / 8] |= 0x80 >> (x % 8);
            }
        }
        bmp.extend_from_slice(&mask);
    }
    bmp
}

fn put_u16(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn put_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Render the HtmlRenamer icon as top-to-bottom RGBA pixels.
///
/// Self-contained copy of the algorithm in
/// `crates/htmlrenamer-gui/src/icon.rs` so the build script
/// has no dependency on workspace crates.
fn render_icon_rgba(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut px_buf = vec![0u8; (size * size * 4) as usize];

    let (x0, y0, x1, y1) = (s * 0.18, s * 0.06, s * 0.78, s * 0.94);
    let fold = s * 0.18;
    let heading = (s * 0.28, s * 0.24, s * 0.60, s * 0.33);
    let lines: [(f32, f32, f32, f32); 3] = [
        (s * 0.28, s * 0.42, s * 0.68, s * 0.47),
        (s * 0.28, s * 0.53, s * 0.62, s * 0.58),
        (s * 0.28, s * 0.64, s * 0.52, s * 0.69),
    ];
    let (a_x0, a_y0, a_x1, a_y1) = (s * 0.40, s * 0.82, s * 0.88, s * 0.82);
    let shaft_half = s * 0.035;
    let head_len = s * 0.14;
    let head_half = s * 0.11;

    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let mut c = [0u8; 3];
            let mut ca: f32 = 0.0;

            // Page and folded corner.
            let cut = ((px - (x1 - fold)) - (py - y0)) / std::f32::consts::SQRT_2;
            let page = ico_box(px, py, x0, y0, x1, y1) * ico_smooth_edge(cut, 0.0);
            ico_over(&mut c, &mut ca, [0xf4, 0xf1, 0xea], page);
            let in_fold = ico_smooth_edge(-cut, 0.0)
                * ico_smooth_edge(x1 - fold - px, 0.0)
                * ico_smooth_edge(py - (y0 + fold), 0.0);
            ico_over(&mut c, &mut ca, [0xd8, 0xd2, 0xc4], in_fold);

            // Heading and text lines.
            let (hx0, hy0, hx1, hy1) = heading;
            ico_over(&mut c, &mut ca, [0x4f, 0xc1, 0xb0], ico_box(px, py, hx0, hy0, hx1, hy1));
            for &(lx0, ly0, lx1, ly1) in &lines {
                ico_over(&mut c, &mut ca, [0x6b, 0x78, 0x85], ico_box(px, py, lx0, ly0, lx1, ly1));
            }

            // Arrow.
            let shaft_end = a_x1 - head_len * 0.6;
            let shaft = ico_smooth_edge(ico_pt_seg_dist(px, py, a_x0, a_y0, shaft_end, a_y1), shaft_half);
            let head_base = a_x1 - head_len;
            let head = if px >= head_base - 1.0 && px <= a_x1 + 1.0 {
                let t = ((px - head_base) / head_len).clamp(0.0, 1.0);
                ico_smooth_edge((py - a_y0).abs(), head_half * (1.0 - t)) * ico_smooth_edge(px, a_x1)
            } else {
                0.0
            };
            ico_over(&mut c, &mut ca, [0x7b, 0xcf, 0x7a], shaft.max(head));

            let idx = ((y * size + x) * 4) as usize;
            px_buf[idx] = c[0];
            px_buf[idx + 1] = c[1];
            px_buf[idx + 2] = c[2];
            px_buf[idx + 3] = (ca * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    px_buf
}

fn ico_over(c: &mut [u8; 3], ca: &mut f32, colour: [u8; 3], alpha: f32) {
    if alpha <= 0.0 {
        return;
    }
    for (dst, src) in c.iter_mut().zip(colour) {
        *dst = ico_lerp(*dst, src, alpha);
    }
    *ca += (1.0 - *ca) * alpha;
}
fn ico_smooth_edge(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -1.0 {
        1.0
    } else if d > 1.0 {
        0.0
    } else {
        0.5 - d * 0.5
    }
}
fn ico_box(px: f32, py: f32, x0: f32, y0: f32, x1: f32, y1: f32) -> f32 {
    ico_smooth_edge((x0 - px).max(px - x1).max(y0 - py).max(py - y1), 0.0)
}
fn ico_pt_seg_dist(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let abx = bx - ax;
    let aby = by - ay;
    let len_sq = abx * abx + aby * aby;
    if len_sq < 0.0001 {
        return ((px - ax).powi(2) + (py - ay).powi(2)).sqrt();
    }
    let t = (((px - ax) * abx + (py - ay) * aby) / len_sq).clamp(0.0, 1.0);
    ((px - (ax + t * abx)).powi(2) + (py - (ay + t * aby)).powi(2)).sqrt()
}
fn ico_lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}
