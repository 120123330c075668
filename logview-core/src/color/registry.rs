use super::{Palette, Rgb};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorKey {
    Process(u32),
    Thread { thread_id: u64, process_id: u32 },
    CodePath { module: String, function: String },
}

/// Stable key → color assignments.
///
/// A key gets a color from the palette the first time it is seen and keeps it
/// for the lifetime of the registry.
#[derive(Debug, Default)]
pub struct ColorRegistry {
    palette: Palette,
    assigned: HashMap<ColorKey, Rgb>,
}

impl ColorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color_for(&mut self, key: ColorKey) -> Rgb {
        let palette = &mut self.palette;
        *self
            .assigned
            .entry(key)
            .or_insert_with(|| palette.next_color())
    }

    pub fn get(&self, key: &ColorKey) -> Option<Rgb> {
        self.assigned.get(key).copied()
    }

    pub fn process(&mut self, process_id: u32) -> Rgb {
        self.color_for(ColorKey::Process(process_id))
    }

    pub fn thread(&mut self, thread_id: u64, process_id: u32) -> Rgb {
        self.color_for(ColorKey::Thread {
            thread_id,
            process_id,
        })
    }

    pub fn code_path(&mut self, module: &str, function: &str) -> Rgb {
        self.color_for(ColorKey::CodePath {
            module: module.to_string(),
            function: function.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}
