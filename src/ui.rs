use crate::catalog::Catalog;
use crate::metrics;
use crate::model::{CardRow, Snapshot, Status, Trend};
use crate::schedule;
use chrono::{Local, Timelike};
use eframe::egui;
use egui::{Color32, Context, FontFamily, FontId, Margin, RichText, Stroke, Vec2, Visuals};
use egui_extras::{Column, TableBuilder};

pub fn set_custom_style(ctx: &Context) {
    // Dark money-green casino theme
    let mut visuals = Visuals::dark();

    visuals.panel_fill = Color32::from_rgb(10, 16, 12);          // deep green panel
    visuals.window_fill = Color32::from_rgb(14, 22, 16);         // window background
    visuals.extreme_bg_color = Color32::from_rgb(22, 36, 26);    // hover highlight
    visuals.faint_bg_color = Color32::from_rgb(18, 30, 22);      // subtle background

    // Widget colors with green accents
    visuals.widgets.inactive.bg_fill = Color32::from_rgb(24, 40, 28);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, Color32::from_rgb(40, 80, 50));

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(34, 60, 40);
    visuals.widgets.hovered.bg_stroke = Stroke::new(2.0, Color32::from_rgb(60, 180, 100));

    visuals.widgets.active.bg_fill = Color32::from_rgb(40, 75, 48);
    visuals.widgets.active.bg_stroke = Stroke::new(2.0, Color32::from_rgb(80, 230, 130));

    visuals.selection.bg_fill = Color32::from_rgb(30, 70, 42);
    visuals.selection.stroke = Stroke::new(1.0, Color32::from_rgb(110, 255, 160));

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = Margin::same(12);
    style.spacing.button_padding = egui::vec2(12.0, 8.0);
    style.spacing.indent = 16.0;

    style.text_styles.insert(
        egui::TextStyle::Body,
        FontId::new(15.0, FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Heading,
        FontId::new(22.0, FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        FontId::new(15.0, FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Monospace,
        FontId::new(14.0, FontFamily::Monospace),
    );

    ctx.set_style(style);
}

const GOLD: Color32 = Color32::from_rgb(255, 210, 100);
const MUTED: Color32 = Color32::from_rgb(150, 170, 150);
const GREEN: Color32 = Color32::from_rgb(100, 255, 150);
const RED: Color32 = Color32::from_rgb(255, 100, 100);
const YELLOW: Color32 = Color32::from_rgb(230, 210, 90);

pub struct RaspaApp {
    catalog: Catalog,
    snapshot: Snapshot,
}

impl RaspaApp {
    pub fn new() -> Self {
        let catalog = Catalog::load("catalog.json");
        let snapshot = build_snapshot(&catalog);
        Self { catalog, snapshot }
    }

    /// Rolls fresh metrics and re-runs the predictor for every card, then
    /// swaps the snapshot wholesale. No partial update.
    fn refresh(&mut self) {
        self.snapshot = build_snapshot(&self.catalog);
        log::info!("snapshot refreshed for {} cards", self.snapshot.rows().len());
    }

    fn status_text(&self, status: Status) -> (&'static str, Color32) {
        match status {
            Status::High => ("🔥 Em alta", GREEN),
            Status::Low => ("⚠️ Em baixa", RED),
            Status::Medium => ("📊 Neutro", YELLOW),
        }
    }

    fn trend_glyph(&self, trend: Trend) -> (&'static str, Color32) {
        match trend {
            Trend::Up => ("↑", GREEN),
            Trend::Down => ("↓", RED),
            Trend::Stable => ("→", Color32::from_rgb(200, 200, 200)),
        }
    }

    fn play_button(&self, ui: &mut egui::Ui, label: &str, url: &str) {
        if ui
            .button(RichText::new(label).color(GOLD).strong())
            .clicked()
        {
            ui.ctx().open_url(egui::OpenUrl::new_tab(url));
        }
    }

    fn featured_card(&self, ui: &mut egui::Ui, card: &CardRow) {
        egui::Frame::new()
            .fill(Color32::from_rgb(18, 30, 22))
            .stroke(Stroke::new(2.0, Color32::from_rgb(60, 140, 80)))
            .inner_margin(Margin::same(12))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("⭐ MELHOR DO MOMENTO ⭐")
                            .color(GOLD)
                            .strong(),
                    );
                    ui.label(RichText::new(&card.name).color(GREEN).strong().size(26.0));

                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() / 2.0 - 180.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new("Taxa de Retorno (RTP)").color(MUTED));
                            ui.label(
                                RichText::new(format!("{}%", card.rtp))
                                    .color(GREEN)
                                    .strong()
                                    .size(40.0),
                            );
                        });
                        ui.add_space(60.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new("Multiplicador").color(MUTED));
                            ui.label(
                                RichText::new(format!("{}%", card.multiplier))
                                    .color(GOLD)
                                    .strong()
                                    .size(40.0),
                            );
                        });
                    });

                    ui.add_space(8.0);
                    ui.label(RichText::new("⏱ Análise de Horários").color(MUTED).strong());
                    let (_, status_color) = self.status_text(card.window.status);
                    ui.label(RichText::new(card.window.recommendation).color(status_color));
                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() / 2.0 - 120.0);
                        ui.label(RichText::new("Próximo Pico:").color(MUTED));
                        ui.label(RichText::new(&card.window.next_high).color(GREEN).strong());
                        ui.add_space(20.0);
                        ui.label(RichText::new("Próxima Baixa:").color(MUTED));
                        ui.label(RichText::new(&card.window.next_low).color(RED).strong());
                    });

                    let (glyph, trend_color) = self.trend_glyph(card.trend);
                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() / 2.0 - 60.0);
                        ui.label(RichText::new(glyph).color(trend_color).strong());
                        ui.label(
                            RichText::new(format!("Tendência {}", card.trend.label()))
                                .color(MUTED),
                        );
                    });

                    ui.add_space(6.0);
                    self.play_button(ui, "🎰 Jogar Agora", &card.url);
                });
            });
    }

    fn alternative_card(&self, ui: &mut egui::Ui, card: &CardRow) {
        egui::Frame::new()
            .fill(Color32::from_rgb(16, 26, 19))
            .stroke(Stroke::new(1.0, Color32::from_rgb(40, 90, 55)))
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&card.name).color(GREEN).strong());
                    let (glyph, trend_color) = self.trend_glyph(card.trend);
                    ui.label(RichText::new(glyph).color(trend_color).strong());
                });
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("RTP {}%", card.rtp)).color(GREEN));
                    ui.separator();
                    ui.label(
                        RichText::new(format!("Multiplicador {}%", card.multiplier)).color(GOLD),
                    );
                });
                let (status_label, status_color) = self.status_text(card.window.status);
                ui.label(RichText::new(status_label).color(status_color));
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("Pico: {}", card.window.next_high)).color(GREEN),
                    );
                    ui.label(RichText::new(format!("Baixa: {}", card.window.next_low)).color(RED));
                });
                self.play_button(ui, "Jogar", &card.url);
            });
    }

    fn card_table(&self, ui: &mut egui::Ui) {
        ui.style_mut().visuals.extreme_bg_color = Color32::from_rgb(22, 36, 26);

        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder().at_least(200.0).clip(true)) // Card name
            .column(Column::exact(70.0))  // RTP
            .column(Column::exact(110.0)) // Multiplier
            .column(Column::exact(90.0))  // Trend
            .column(Column::exact(110.0)) // Status
            .column(Column::exact(80.0))  // Next high
            .column(Column::exact(80.0))  // Next low
            .column(Column::exact(90.0))  // Play
            .header(32.0, |mut header| {
                for title in [
                    "Raspadinha",
                    "RTP",
                    "Multiplicador",
                    "Tendência",
                    "Status",
                    "Pico",
                    "Baixa",
                    "",
                ] {
                    header.col(|ui| {
                        ui.heading(RichText::new(title).color(Color32::from_rgb(170, 200, 170)));
                    });
                }
            })
            .body(|body| {
                body.rows(36.0, self.snapshot.rows().len(), |mut row| {
                    let r = &self.snapshot.rows()[row.index()];

                    row.col(|ui| {
                        ui.label(RichText::new(&r.name).color(Color32::from_rgb(210, 235, 210)));
                    });

                    row.col(|ui| {
                        let rtp_color = if r.rtp >= 90 {
                            GREEN
                        } else if r.rtp >= 75 {
                            YELLOW
                        } else {
                            Color32::from_rgb(220, 160, 110)
                        };
                        ui.label(
                            RichText::new(format!("{}%", r.rtp))
                                .color(rtp_color)
                                .strong(),
                        );
                    });

                    row.col(|ui| {
                        ui.label(RichText::new(format!("{}%", r.multiplier)).color(GOLD));
                    });

                    row.col(|ui| {
                        let (glyph, color) = self.trend_glyph(r.trend);
                        ui.label(RichText::new(glyph).color(color).strong());
                        ui.label(RichText::new(r.trend.label()).color(MUTED).small());
                    });

                    row.col(|ui| {
                        let (label, color) = self.status_text(r.window.status);
                        ui.label(RichText::new(label).color(color));
                    });

                    row.col(|ui| {
                        ui.label(RichText::new(&r.window.next_high).color(GREEN));
                    });

                    row.col(|ui| {
                        ui.label(RichText::new(&r.window.next_low).color(RED));
                    });

                    row.col(|ui| {
                        self.play_button(ui, "Jogar", &r.url);
                    });
                });
            });
    }
}

impl eframe::App for RaspaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Local::now();

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.heading(
                    RichText::new("🎰 RobôRaspadinhas — Consultor de Raspadinhas")
                        .color(GOLD)
                        .strong()
                        .size(24.0),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_sized(
                            Vec2::new(110.0, 32.0),
                            egui::Button::new(
                                RichText::new("🔄 Atualizar").color(GOLD).strong(),
                            ),
                        )
                        .clicked()
                    {
                        self.refresh();
                    }

                    ui.separator();

                    // Cosmetic ticking clock; the generators read the wall
                    // clock themselves at refresh time.
                    ui.label(
                        RichText::new(format!("🕒 {}", now.format("%H:%M:%S")))
                            .color(MUTED),
                    );
                });
            });

            ui.add_space(2.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new("🔥 Raspadinha em alta agora!")
                            .color(GREEN)
                            .strong()
                            .size(28.0),
                    );
                    ui.label(
                        RichText::new("Dados atualizados em tempo real do sistema oficial")
                            .color(MUTED),
                    );
                });

                ui.add_space(10.0);

                if let Some(best) = self.snapshot.featured() {
                    let best = best.clone();
                    self.featured_card(ui, &best);
                }

                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Outras Opções em Destaque")
                            .color(Color32::from_rgb(210, 235, 210))
                            .strong()
                            .size(20.0),
                    );
                });

                let alternatives: Vec<CardRow> = self.snapshot.alternatives().to_vec();
                ui.columns(2, |cols| {
                    for (col, card) in cols.iter_mut().zip(&alternatives) {
                        self.alternative_card(col, card);
                    }
                });

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(6.0);

                self.card_table(ui);

                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("⚡ Aproveite agora os melhores retornos do dia!")
                            .color(GOLD)
                            .strong(),
                    );
                    self.play_button(ui, "Ver Todas as Raspadinhas", &self.catalog.fallback_url);
                });
            });
        });

        // Keep the header clock ticking once a second.
        ctx.request_repaint_after(std::time::Duration::from_secs(1));
    }
}

/// One full generation pass: fresh random metrics plus a prediction per
/// card, all against the same wall-clock reading.
fn build_snapshot(catalog: &Catalog) -> Snapshot {
    let now = Local::now();
    build_snapshot_at(catalog, now.hour(), now.minute(), &mut rand::thread_rng())
}

fn build_snapshot_at(
    catalog: &Catalog,
    hour: u32,
    minute: u32,
    rng: &mut impl rand::Rng,
) -> Snapshot {
    let rows = metrics::generate(catalog, rng)
        .into_iter()
        .map(|m| CardRow {
            url: catalog.url_for(&m.name).to_string(),
            window: schedule::predict(&m.name, hour, minute),
            name: m.name,
            rtp: m.rtp,
            multiplier: m.multiplier,
            trend: m.trend,
        })
        .collect();

    Snapshot::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn snapshot_covers_every_card_with_a_url() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(3);
        let snap = build_snapshot_at(&catalog, 10, 20, &mut rng);

        assert_eq!(snap.rows().len(), 15);
        for r in snap.rows() {
            assert!(r.url.starts_with("https://raspabolada.bet"));
        }
    }

    #[test]
    fn featured_leads_the_snapshot() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(11);
        let snap = build_snapshot_at(&catalog, 14, 5, &mut rng);

        let best = snap.featured().unwrap();
        assert!(snap.rows().iter().all(|r| r.rtp <= best.rtp));
        assert_eq!(snap.alternatives().len(), 2);
    }

    #[test]
    fn predictions_use_the_shared_clock() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(5);
        let snap = build_snapshot_at(&catalog, 10, 20, &mut rng);

        for r in snap.rows() {
            assert_eq!(r.window, schedule::predict(&r.name, 10, 20));
        }
    }
}
