use super::*;
use crate::foundation::core::{Rect, Rgba8Premul};

fn solid(x: f64) -> Layer {
    Layer::solid(Rgba8Premul::WHITE, Rect::new(x, 0.0, x + 10.0, 10.0))
}

#[test]
fn add_appends_on_top_with_fresh_ids() {
    let mut tree = LayerTree::new();
    let a = tree.add_layer(solid(0.0));
    let b = tree.add_layer(solid(1.0));
    assert_ne!(a, b);
    assert_eq!(tree.ids(), vec![a, b]);
    assert_eq!(tree.layer_count(), 2);
}

#[test]
fn ids_are_not_reused_after_removal() {
    let mut tree = LayerTree::new();
    let a = tree.add_layer(solid(0.0));
    assert!(tree.remove_layer(a));
    let b = tree.add_layer(solid(0.0));
    assert_ne!(a, b);
    assert!(!tree.remove_layer(a));
}

#[test]
fn bring_to_front_reorders() {
    let mut tree = LayerTree::new();
    let a = tree.add_layer(solid(0.0));
    let b = tree.add_layer(solid(1.0));
    let c = tree.add_layer(solid(2.0));
    assert!(tree.bring_to_front(a));
    assert_eq!(tree.ids(), vec![b, c, a]);
    assert!(!tree.bring_to_front(LayerId(99)));
}

#[test]
fn set_props_clamps_opacity() {
    let mut tree = LayerTree::new();
    let a = tree.add_layer(solid(0.0).with_opacity(0.0));
    let frame = Rect::new(1.0, 2.0, 3.0, 4.0);
    assert!(tree.set_props(a, LayerProps { frame, opacity: 1.4 }));
    let layer = tree.layer(a).unwrap();
    assert_eq!(layer.frame, frame);
    assert_eq!(layer.opacity, 1.0);
    assert!(!tree.set_props(LayerId(42), layer.props()));
}

#[test]
fn layer_constructors_pick_content_modes() {
    let bmp = std::sync::Arc::new(crate::assets::Bitmap::solid(2, 2, Rgba8Premul::BLACK));
    let img = Layer::image(bmp.clone(), Rect::ZERO);
    assert_eq!(img.content_mode, crate::scene::layer::ContentMode::AspectFill);
    assert!(img.clips_to_bounds);
    assert!(!img.is_snapshot());
    assert!(Layer::snapshot(bmp, Rect::ZERO).is_snapshot());
}
