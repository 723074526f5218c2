use super::*;
use crate::config::PlotConfig;
use crate::data::Dataset;
use crate::plot::ScatterPlot;
use eframe::egui;
use eframe::epaint::Shape;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SAMPLE: &str = "category,id,x,y\nA,p1,0.0,0.0\nA,p2,10.0,10.0\nB,p3,5.0,5.0\n";

fn sample_app(config: PlotConfig) -> ScatterApp {
    let dataset = Dataset::from_reader(SAMPLE.as_bytes()).expect("sample parses");
    let plot = ScatterPlot::new(dataset, &mut StdRng::seed_from_u64(config.seed))
        .expect("sample is drawable");
    ScatterApp::new(plot, config)
}

/// Run a single headless egui frame showing the app.
fn run_frame(ctx: &egui::Context, app: &ScatterApp) -> egui::FullOutput {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(1200.0, 800.0),
    ));
    ctx.run(raw, |ctx| app.show(ctx))
}

fn circles(output: &egui::FullOutput) -> Vec<(egui::Pos2, egui::Color32)> {
    output
        .shapes
        .iter()
        .filter_map(|clipped| match &clipped.shape {
            Shape::Circle(circle) => Some((circle.center, circle.fill)),
            _ => None,
        })
        .collect()
}

#[test]
fn frame_paints_one_circle_per_record() {
    let app = sample_app(PlotConfig::default());
    let ctx = egui::Context::default();
    let output = run_frame(&ctx, &app);

    let painted = circles(&output);
    assert_eq!(painted.len(), 3);

    // Relative placement: p1 bottom-left, p2 top-right, p3 centered between them
    let (p1, p2, p3) = (painted[0].0, painted[1].0, painted[2].0);
    assert_eq!(p2 - p1, egui::vec2(800.0, -300.0));
    assert_eq!(p3 - p1, egui::vec2(400.0, -150.0));
}

#[test]
fn circle_colors_match_category_table() {
    let app = sample_app(PlotConfig::default());
    let ctx = egui::Context::default();
    let painted = circles(&run_frame(&ctx, &app));

    let a: egui::Color32 = app.plot.colors().get("A").expect("A has a color").into();
    let b: egui::Color32 = app.plot.colors().get("B").expect("B has a color").into();
    assert_eq!(painted[0].1, a);
    assert_eq!(painted[1].1, a);
    assert_eq!(painted[2].1, b);
}

#[test]
fn repaint_is_stable() {
    let app = sample_app(PlotConfig::default());
    let ctx = egui::Context::default();
    let first = circles(&run_frame(&ctx, &app));
    let second = circles(&run_frame(&ctx, &app));
    assert_eq!(first, second);
}

#[test]
fn legend_swatches_are_painted() {
    let app = sample_app(PlotConfig::default());
    let ctx = egui::Context::default();
    let output = run_frame(&ctx, &app);
    let swatches = output
        .shapes
        .iter()
        .filter(|clipped| match &clipped.shape {
            Shape::Rect(rect) => rect.rect.width() == 10.0 && rect.rect.height() == 10.0,
            _ => false,
        })
        .count();
    assert_eq!(swatches, 2);
}

#[test]
fn layout_error_is_shown_instead_of_plot() {
    // Too narrow for two x ticks
    let config = PlotConfig {
        canvas_width: 200.0,
        ..PlotConfig::default()
    };
    let app = sample_app(config);
    let ctx = egui::Context::default();
    let output = run_frame(&ctx, &app);

    assert!(circles(&output).is_empty());
    assert!(output
        .shapes
        .iter()
        .any(|clipped| matches!(clipped.shape, Shape::Text(_))));
}
