use crate::scene::layer::{Layer, LayerId, LayerProps};

/// Container surface that temporary transition layers are added to.
///
/// Layers are ordered back to front; newly added layers go on top.
pub trait LayerContainer {
    fn add_layer(&mut self, layer: Layer) -> LayerId;

    /// Returns false when `id` is not in the container.
    fn remove_layer(&mut self, id: LayerId) -> bool;

    fn bring_to_front(&mut self, id: LayerId) -> bool;

    fn set_props(&mut self, id: LayerId, props: LayerProps) -> bool;

    fn layer(&self, id: LayerId) -> Option<&Layer>;

    fn layer_count(&self) -> usize;
}

/// In-memory [`LayerContainer`] with monotonically allocated ids.
#[derive(Clone, Debug, Default)]
pub struct LayerTree {
    entries: Vec<(LayerId, Layer)>,
    next_id: u64,
}

impl LayerTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers back to front.
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.entries.iter().map(|(_, l)| l)
    }

    /// Ids back to front.
    pub fn ids(&self) -> Vec<LayerId> {
        self.entries.iter().map(|(id, _)| *id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn index_of(&self, id: LayerId) -> Option<usize> {
        self.entries.iter().position(|(e, _)| *e == id)
    }
}

impl LayerContainer for LayerTree {
    fn add_layer(&mut self, layer: Layer) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, layer));
        id
    }

    fn remove_layer(&mut self, id: LayerId) -> bool {
        match self.index_of(id) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    fn bring_to_front(&mut self, id: LayerId) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        let entry = self.entries.remove(idx);
        self.entries.push(entry);
        true
    }

    fn set_props(&mut self, id: LayerId, props: LayerProps) -> bool {
        match self.entries.iter_mut().find(|(e, _)| *e == id) {
            Some((_, layer)) => {
                layer.apply(props);
                true
            }
            None => false,
        }
    }

    fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.entries.iter().find(|(e, _)| *e == id).map(|(_, l)| l)
    }

    fn layer_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/tree.rs"]
mod tests;
