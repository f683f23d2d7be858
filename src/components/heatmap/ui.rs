use egui::{Align2, Color32, FontId, Rect, Sense, Stroke, Vec2};

use crate::components::palette::heat_color;
use crate::telemetry::{IntensityGrid, KeyHeat, KeyPos, KEY_COLS, KEY_LAYOUT, KEY_ROWS};

/// Paints a `rows × cols` grid filling the available width. `cell` returns
/// the intensity ratio and an optional caption for each cell.
pub fn heat_grid(
    ui: &mut egui::Ui,
    rows: usize,
    cols: usize,
    height: f32,
    mut cell: impl FnMut(usize, usize) -> (f64, Option<String>),
) -> egui::Response {
    let size = Vec2::new(ui.available_width(), height);
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    if rows == 0 || cols == 0 || !ui.is_rect_visible(rect) {
        return response;
    }

    let painter = ui.painter_at(rect);
    let cell_size = Vec2::new(rect.width() / cols as f32, rect.height() / rows as f32);
    let font = FontId::proportional((cell_size.y * 0.35).clamp(8.0, 16.0));

    for row in 0..rows {
        for col in 0..cols {
            let min = rect.min + Vec2::new(col as f32 * cell_size.x, row as f32 * cell_size.y);
            let cell_rect = Rect::from_min_size(min, cell_size);
            let (ratio, caption) = cell(row, col);
            painter.rect_filled(cell_rect, 2.0, heat_color(ratio));
            painter.rect_stroke(cell_rect, 2.0, Stroke::new(0.5, Color32::BLACK));
            if let Some(caption) = caption {
                painter.text(
                    cell_rect.center(),
                    Align2::CENTER_CENTER,
                    caption,
                    font.clone(),
                    Color32::WHITE,
                );
            }
        }
    }

    response
}

pub fn intensity_heatmap(ui: &mut egui::Ui, grid: &IntensityGrid, height: f32) -> egui::Response {
    heat_grid(ui, grid.rows(), grid.cols(), height, |row, col| {
        (grid.get(row, col).unwrap_or_default(), None)
    })
}

/// Key block with labels; hovering shows lifetime press counts.
pub fn key_heatmap(ui: &mut egui::Ui, heat: &KeyHeat, height: f32) {
    let response = heat_grid(ui, KEY_ROWS, KEY_COLS, height, |row, col| {
        let ratio = KeyPos::new(row, col).map_or(0.0, |k| heat.intensity(k));
        (ratio, Some(KEY_LAYOUT[row][col].to_owned()))
    });
    response.on_hover_ui(|ui| {
        let busiest = heat.busiest(5);
        if busiest.is_empty() {
            ui.label("No key presses yet");
            return;
        }
        for (key, count) in busiest {
            ui.label(format!("{}: {} presses", key.label(), count));
        }
    });
}
