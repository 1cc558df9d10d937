use egui::{CentralPanel, CollapsingHeader, Context, DragValue, RichText, ScrollArea, Slider, Ui};
use crate::client::{MeasurementSet, Recommendation, RecommendationClient};
use crate::form::{FormState, MEASUREMENT_MAX};

pub struct LitFitApp {
    pub form: FormState,
    client:   RecommendationClient,
    outcome:  Option<Result<Recommendation, String>>,
}

impl Default for LitFitApp {
    fn default() -> Self {
        Self { form: FormState::default(), client: RecommendationClient::new(), outcome: None }
    }
}

impl LitFitApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);
        Self::default()
    }

    /// Resolve the payload once and block on the single outstanding request.
    /// The previous outcome is replaced wholesale, success or not.
    fn submit(&mut self) {
        let payload: MeasurementSet = self.form.resolve();
        self.outcome = Some(self.client.recommend(&payload).map_err(|e| {
            log::error!("submission failed: {e}");
            e.to_string()
        }));
    }
}

// ── Form ──────────────────────────────────────────────────────────────────────

fn render_form(ui: &mut Ui, form: &mut FormState) {
    ui.horizontal(|ui| {
        ui.label("Enter your height (cm):");
        ui.add(DragValue::new(&mut form.height).range(0.0..=f64::INFINITY).speed(1.0));
    });
    ui.add_space(8.0);

    if form.weight_disclosure.is_revealed() {
        ui.horizontal(|ui| {
            ui.label("Enter your weight (kg):");
            ui.add(DragValue::new(&mut form.weight).range(0.0..=f64::INFINITY).speed(1.0));
        });
    } else if ui.button("Click here if you want to enter your weight").clicked() {
        form.reveal_weight();
    }
    ui.add_space(8.0);

    if form.measurements_disclosure.is_revealed() {
        ui.add(Slider::new(&mut form.chest, 0.0..=MEASUREMENT_MAX)
            .step_by(1.0).fixed_decimals(0).text("Chest Measurement (cm)"));
        ui.add(Slider::new(&mut form.waist, 0.0..=MEASUREMENT_MAX)
            .step_by(1.0).fixed_decimals(0).text("Waist Measurement (cm)"));
    } else if ui.button("Click here if you want to enter chest and waist measurements").clicked() {
        form.reveal_measurements();
    }
}

// ── Results ───────────────────────────────────────────────────────────────────

fn size_card(ui: &mut Ui, title: &str, size: &str) {
    egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(140.0, 90.0));
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(title).strong());
                ui.add_space(10.0);
                ui.label(RichText::new(size).size(32.0));
            });
        });
}

fn render_result(ui: &mut Ui, rec: &Recommendation) {
    ui.heading("📏 Your Perfect Fit");
    ui.add_space(8.0);
    ui.columns(2, |cols| {
        size_card(&mut cols[0], "👖 Jeans Size",   rec.size_for("Jeans").unwrap_or("—"));
        size_card(&mut cols[1], "👕 T-Shirt Size", rec.size_for("T-Shirt").unwrap_or("—"));
    });

    // Any further garment categories the service knows about.
    let extras: Vec<_> = rec.size_recommendation.iter()
        .filter(|(g, _)| !matches!(g.as_str(), "Jeans" | "T-Shirt")).collect();
    if !extras.is_empty() {
        ui.add_space(6.0);
        for (garment, size) in extras { ui.label(format!("{garment}: {size}")); }
    }

    ui.add_space(8.0);
    CollapsingHeader::new(RichText::new("📐 Detailed Body Measurements").strong())
        .default_open(true)
        .show(ui, |ui| {
            let m = &rec.body_measurements;
            ui.label(format!("Height: {} cm", m.height_cms));
            ui.label(format!("Weight: {} kg", m.weight_kgs));
            ui.label(format!("Chest: {} cm", m.chest_cms));
            ui.label(format!("Waist: {} cm", m.waist_cms));
        });
}

// ── Main loop ─────────────────────────────────────────────────────────────────

impl eframe::App for LitFitApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(4.0);
                ui.heading("👗 LitFit Size Recommender");
                ui.label(RichText::new("Your Personal Clothing Size Assistant").strong());
                ui.add_space(12.0);
                ui.separator();
                ui.add_space(12.0);

                render_form(ui, &mut self.form);
                ui.add_space(16.0);

                if ui.button(RichText::new("Get Size Recommendations").strong()).clicked() {
                    self.submit();
                }
                ui.add_space(12.0);

                match &self.outcome {
                    Some(Ok(rec))  => render_result(ui, rec),
                    Some(Err(msg)) => { ui.colored_label(ui.visuals().error_fg_color, msg); }
                    None           => {}
                }
            });
        });
    }
}
