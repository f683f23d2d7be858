use log::trace;
use serde::{Deserialize, Serialize};

pub const KEY_ROWS: usize = 4;
pub const KEY_COLS: usize = 10;

/// Physical key labels of the monitored block, row-major.
pub const KEY_LAYOUT: [[&str; KEY_COLS]; KEY_ROWS] = [
    ["ESC", "1", "2", "3", "4", "5", "6", "7", "8", "9"],
    ["TAB", "Q", "W", "E", "R", "T", "Y", "U", "I", "O"],
    ["CAPS", "A", "S", "D", "F", "G", "H", "J", "K", "L"],
    ["SHIFT", "Z", "X", "C", "V", "B", "N", "M", ",", "."],
];

/// Cell of the 4×10 key block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPos {
    row: u8,
    col: u8,
}

impl KeyPos {
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < KEY_ROWS && col < KEY_COLS).then(|| Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Case-insensitive lookup of a key label such as `"W"` or `"shift"`.
    pub fn from_label(label: &str) -> Option<Self> {
        KEY_LAYOUT.iter().enumerate().find_map(|(row, keys)| {
            keys.iter()
                .position(|k| k.eq_ignore_ascii_case(label))
                .and_then(|col| Self::new(row, col))
        })
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    pub fn label(&self) -> &'static str {
        KEY_LAYOUT[self.row()][self.col()]
    }

    pub fn all() -> impl Iterator<Item = KeyPos> {
        (0..KEY_ROWS).flat_map(|row| (0..KEY_COLS).filter_map(move |col| Self::new(row, col)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyHeatConfig {
    /// Ceiling for each cell.
    pub cap: u32,
    /// Added per press.
    pub press_step: u32,
    /// Removed per decay tick.
    pub decay_step: u32,
}

impl Default for KeyHeatConfig {
    fn default() -> Self {
        Self {
            cap: 50,
            press_step: 5,
            decay_step: 1,
        }
    }
}

/// Decaying press intensity for every key in the block, plus lifetime press totals.
#[derive(Debug, Clone)]
pub struct KeyHeat {
    config: KeyHeatConfig,
    heat: [[u32; KEY_COLS]; KEY_ROWS],
    presses: [[u64; KEY_COLS]; KEY_ROWS],
    last_pressed: Option<KeyPos>,
}

impl Default for KeyHeat {
    fn default() -> Self {
        Self::new(KeyHeatConfig::default())
    }
}

impl KeyHeat {
    pub fn new(config: KeyHeatConfig) -> Self {
        Self {
            config,
            heat: [[0; KEY_COLS]; KEY_ROWS],
            presses: [[0; KEY_COLS]; KEY_ROWS],
            last_pressed: None,
        }
    }

    /// Swaps the tuning. Existing counters are pulled under a lowered cap.
    pub fn set_config(&mut self, config: KeyHeatConfig) {
        self.config = config;
        for cell in self.heat.iter_mut().flatten() {
            *cell = (*cell).min(config.cap);
        }
    }

    pub fn press(&mut self, key: KeyPos) {
        let cell = &mut self.heat[key.row()][key.col()];
        *cell = cell.saturating_add(self.config.press_step).min(self.config.cap);
        self.presses[key.row()][key.col()] += 1;
        self.last_pressed = Some(key);
        trace!("key {} heat {}", key.label(), *cell);
    }

    pub fn decay(&mut self) {
        let step = self.config.decay_step;
        for cell in self.heat.iter_mut().flatten() {
            *cell = cell.saturating_sub(step);
        }
    }

    pub fn heat(&self, key: KeyPos) -> u32 {
        self.heat[key.row()][key.col()]
    }

    /// Heat as a fraction of the cap.
    pub fn intensity(&self, key: KeyPos) -> f64 {
        if self.config.cap == 0 {
            return 0.0;
        }
        self.heat(key) as f64 / self.config.cap as f64
    }

    pub fn presses(&self, key: KeyPos) -> u64 {
        self.presses[key.row()][key.col()]
    }

    pub fn total_presses(&self) -> u64 {
        self.presses.iter().flatten().sum()
    }

    pub fn last_pressed(&self) -> Option<KeyPos> {
        self.last_pressed
    }

    /// Keys with the most lifetime presses, busiest first, ties by layout order.
    pub fn busiest(&self, n: usize) -> Vec<(KeyPos, u64)> {
        let mut keys: Vec<_> = KeyPos::all()
            .map(|k| (k, self.presses(k)))
            .filter(|(_, count)| *count > 0)
            .collect();
        keys.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        keys.truncate(n);
        keys
    }

    pub fn is_cold(&self) -> bool {
        self.heat.iter().flatten().all(|&c| c == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(label: &str) -> KeyPos {
        KeyPos::from_label(label).unwrap()
    }

    #[test]
    fn labels_map_to_layout_cells() {
        assert_eq!(key("ESC"), KeyPos::new(0, 0).unwrap());
        assert_eq!(key("w"), KeyPos::new(1, 2).unwrap());
        assert_eq!(key("."), KeyPos::new(3, 9).unwrap());
        assert_eq!(KeyPos::from_label("F12"), None);
        assert_eq!(KeyPos::new(4, 0), None);
        assert_eq!(KeyPos::all().count(), KEY_ROWS * KEY_COLS);
    }

    #[test]
    fn presses_then_decay_floor_at_zero() {
        let mut heat = KeyHeat::default();
        let w = key("W");
        for _ in 0..3 {
            heat.press(w);
        }
        assert_eq!(heat.heat(w), 15);

        for _ in 0..20 {
            heat.decay();
        }
        assert_eq!(heat.heat(w), 0);
        assert!(heat.is_cold());
        assert_eq!(heat.presses(w), 3);
    }

    #[test]
    fn sustained_presses_saturate_at_cap() {
        let mut heat = KeyHeat::default();
        let a = key("A");
        for _ in 0..100 {
            heat.press(a);
            assert!(heat.heat(a) <= 50);
        }
        assert_eq!(heat.heat(a), 50);
        assert_eq!(heat.intensity(a), 1.0);
    }

    #[test]
    fn decay_is_monotone_per_cell() {
        let mut heat = KeyHeat::default();
        for (i, k) in KeyPos::all().enumerate() {
            for _ in 0..(i % 7) {
                heat.press(k);
            }
        }
        let mut previous: Vec<_> = KeyPos::all().map(|k| heat.heat(k)).collect();
        for _ in 0..60 {
            heat.decay();
            let current: Vec<_> = KeyPos::all().map(|k| heat.heat(k)).collect();
            assert!(current.iter().zip(&previous).all(|(c, p)| c <= p));
            previous = current;
        }
        assert!(heat.is_cold());
    }

    #[test]
    fn lowering_cap_clamps_existing_heat() {
        let mut heat = KeyHeat::default();
        let q = key("Q");
        for _ in 0..8 {
            heat.press(q);
        }
        heat.set_config(KeyHeatConfig {
            cap: 20,
            ..Default::default()
        });
        assert_eq!(heat.heat(q), 20);
    }

    #[test]
    fn busiest_orders_by_count() {
        let mut heat = KeyHeat::default();
        heat.press(key("D"));
        heat.press(key("S"));
        heat.press(key("S"));
        assert_eq!(heat.busiest(5), vec![(key("S"), 2), (key("D"), 1)]);
        assert_eq!(heat.last_pressed(), Some(key("S")));
        assert_eq!(heat.total_presses(), 3);
    }
}
