use super::*;

const RED: Rgba8Premul = Rgba8Premul::opaque(255, 0, 0);

fn bitmap_2x1() -> Arc<Bitmap> {
    // Left pixel green, right pixel blue.
    Arc::new(Bitmap {
        width: 2,
        height: 1,
        rgba8_premul: Arc::new(vec![0, 255, 0, 255, 0, 0, 255, 255]),
    })
}

#[test]
fn solid_layer_fills_only_its_frame() {
    let layer = Layer::solid(RED, Rect::new(2.0, 2.0, 4.0, 4.0));
    let out = rasterize([&layer], Rect::new(0.0, 0.0, 6.0, 6.0), Rgba8Premul::BLACK).unwrap();
    assert_eq!((out.width, out.height), (6, 6));
    assert_eq!(out.pixel(2, 2).unwrap(), [255, 0, 0, 255]);
    assert_eq!(out.pixel(3, 3).unwrap(), [255, 0, 0, 255]);
    assert_eq!(out.pixel(1, 1).unwrap(), [0, 0, 0, 255]);
    assert_eq!(out.pixel(4, 4).unwrap(), [0, 0, 0, 255]);
}

#[test]
fn later_layers_draw_on_top() {
    let bottom = Layer::solid(RED, Rect::new(0.0, 0.0, 4.0, 4.0));
    let top = Layer::solid(Rgba8Premul::WHITE, Rect::new(0.0, 0.0, 2.0, 4.0));
    let out = rasterize(
        [&bottom, &top],
        Rect::new(0.0, 0.0, 4.0, 4.0),
        Rgba8Premul::transparent(),
    )
    .unwrap();
    assert_eq!(out.pixel(0, 0).unwrap(), [255, 255, 255, 255]);
    assert_eq!(out.pixel(3, 0).unwrap(), [255, 0, 0, 255]);
}

#[test]
fn transparent_and_degenerate_layers_are_skipped() {
    let hidden = Layer::solid(RED, Rect::new(0.0, 0.0, 4.0, 4.0)).with_opacity(0.0);
    let empty = Layer::image(bitmap_2x1(), Rect::ZERO);
    let out = rasterize(
        [&hidden, &empty],
        Rect::new(0.0, 0.0, 4.0, 4.0),
        Rgba8Premul::BLACK,
    )
    .unwrap();
    assert!(out.rgba8_premul.chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
}

#[test]
fn scale_to_fill_stretches_the_bitmap() {
    let layer = Layer::snapshot(bitmap_2x1(), Rect::new(0.0, 0.0, 4.0, 2.0));
    let out = rasterize([&layer], Rect::new(0.0, 0.0, 4.0, 2.0), Rgba8Premul::BLACK).unwrap();
    assert_eq!(out.pixel(0, 0).unwrap(), [0, 255, 0, 255]);
    assert_eq!(out.pixel(1, 1).unwrap(), [0, 255, 0, 255]);
    assert_eq!(out.pixel(2, 0).unwrap(), [0, 0, 255, 255]);
    assert_eq!(out.pixel(3, 1).unwrap(), [0, 0, 255, 255]);
}

#[test]
fn aspect_fill_is_clipped_to_the_frame() {
    // 2x1 content in a 2x2 frame fills to 4x2, centred: only the middle shows.
    let layer = Layer::image(bitmap_2x1(), Rect::new(1.0, 0.0, 3.0, 2.0));
    let out = rasterize([&layer], Rect::new(0.0, 0.0, 4.0, 2.0), Rgba8Premul::BLACK).unwrap();
    assert_eq!(out.pixel(0, 0).unwrap(), [0, 0, 0, 255]);
    assert_eq!(out.pixel(1, 0).unwrap(), [0, 255, 0, 255]);
    assert_eq!(out.pixel(2, 0).unwrap(), [0, 0, 255, 255]);
    assert_eq!(out.pixel(3, 0).unwrap(), [0, 0, 0, 255]);
}

#[test]
fn aspect_fit_letterboxes() {
    let layer = Layer::image(bitmap_2x1(), Rect::new(0.0, 0.0, 2.0, 2.0))
        .with_content_mode(ContentMode::AspectFit);
    let out = rasterize(
        [&layer],
        Rect::new(0.0, 0.0, 2.0, 2.0),
        Rgba8Premul::transparent(),
    )
    .unwrap();
    // Content occupies y in [0.5, 1.5): pixel row 0 centre (0.5) is inside, row 1 centre (1.5) is not.
    assert_eq!(out.pixel(0, 0).unwrap(), [0, 255, 0, 255]);
    assert_eq!(out.pixel(0, 1).unwrap(), [0, 0, 0, 0]);
}

#[test]
fn viewport_offset_translates_layers() {
    let layer = Layer::solid(RED, Rect::new(10.0, 10.0, 11.0, 11.0));
    let out = rasterize([&layer], Rect::new(10.0, 10.0, 12.0, 12.0), Rgba8Premul::BLACK).unwrap();
    assert_eq!(out.pixel(0, 0).unwrap(), [255, 0, 0, 255]);
    assert_eq!(out.pixel(1, 1).unwrap(), [0, 0, 0, 255]);
}

#[test]
fn oversized_or_invalid_viewports_are_rejected() {
    let big = f64::from(MAX_RASTER_EDGE) + 10.0;
    assert!(rasterize(Vec::<&Layer>::new(), Rect::new(0.0, 0.0, big, 1.0), Rgba8Premul::BLACK).is_err());
    assert!(rasterize(Vec::<&Layer>::new(), Rect::new(0.0, 0.0, f64::NAN, 1.0), Rgba8Premul::BLACK).is_err());
}

#[test]
fn full_viewport_snapshot_matches_per_pixel_blend() {
    let layer = Layer::snapshot(bitmap_2x1(), Rect::new(0.0, 0.0, 2.0, 1.0)).with_opacity(0.5);
    let out = rasterize([&layer], Rect::new(0.0, 0.0, 2.0, 1.0), Rgba8Premul::BLACK).unwrap();
    assert_eq!(
        out.pixel(0, 0).unwrap(),
        over([0, 0, 0, 255], [0, 255, 0, 255], 0.5)
    );
    assert_eq!(
        out.pixel(1, 0).unwrap(),
        over([0, 0, 0, 255], [0, 0, 255, 255], 0.5)
    );
}
