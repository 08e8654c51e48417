//! Menu-driven exploration of the dashboard using `dialoguer`.

use airbnb_dashboard::{
    Coordinator,
    sink::{Sink, TextSink},
};
use airbnb_dashboard_models::{ChartKind, Gesture, view::ChartView};
use dialoguer::{Input, Select};

/// Top-level actions in the interactive menu.
enum Action {
    ClickRegion,
    ChooseCountry,
    ClickSlice,
    ClickBarHigh,
    ClickBarLow,
    ClickRadial,
    MoveSlider,
    ClickBubble,
    BubbleBack,
    Reset,
    Quit,
}

impl Action {
    const ALL: &[Self] = &[
        Self::ClickRegion,
        Self::ChooseCountry,
        Self::ClickSlice,
        Self::ClickBarHigh,
        Self::ClickBarLow,
        Self::ClickRadial,
        Self::MoveSlider,
        Self::ClickBubble,
        Self::BubbleBack,
        Self::Reset,
        Self::Quit,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::ClickRegion => "Click a map region",
            Self::ChooseCountry => "Pick a country from the dropdown",
            Self::ClickSlice => "Click a room type slice",
            Self::ClickBarHigh => "Click a bar (top revenue)",
            Self::ClickBarLow => "Click a bar (bottom revenue)",
            Self::ClickRadial => "Click a circular bar",
            Self::MoveSlider => "Move the bar-count slider",
            Self::ClickBubble => "Click a bubble",
            Self::BubbleBack => "Bubble chart: back",
            Self::Reset => "Reset all selections",
            Self::Quit => "Quit",
        }
    }
}

/// Runs the interactive loop until the user quits.
///
/// Prints every chart after each applied gesture.
///
/// # Errors
///
/// Returns an error if a prompt or writing to stdout fails.
pub fn run(coordinator: &mut Coordinator) -> Result<(), Box<dyn std::error::Error>> {
    print(coordinator)?;

    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();

    loop {
        println!();
        let idx = Select::new()
            .with_prompt("Dashboard")
            .items(&labels)
            .default(0)
            .interact()?;

        let gesture = match Action::ALL[idx] {
            Action::Quit => return Ok(()),
            Action::Reset => Some(Gesture::Reset),
            Action::BubbleBack => Some(Gesture::BubbleBack),
            Action::ChooseCountry => pick_country(coordinator)?,
            Action::MoveSlider => Some(move_slider(coordinator)?),
            Action::ClickRegion => pick(
                "Region",
                region_names(coordinator),
                |name| Gesture::ClickRegion { name },
            )?,
            Action::ClickSlice => pick(
                "Room type",
                labels_of(coordinator, ChartKind::Donut),
                |room_type| Gesture::ClickSlice { room_type },
            )?,
            Action::ClickBarHigh => pick(
                "Bar",
                labels_of(coordinator, ChartKind::BarHigh),
                |label| Gesture::ClickBar {
                    chart: ChartKind::BarHigh,
                    label,
                },
            )?,
            Action::ClickBarLow => pick(
                "Bar",
                labels_of(coordinator, ChartKind::BarLow),
                |label| Gesture::ClickBar {
                    chart: ChartKind::BarLow,
                    label,
                },
            )?,
            Action::ClickRadial => pick(
                "Bar",
                labels_of(coordinator, ChartKind::Radial),
                |label| Gesture::ClickRadial { label },
            )?,
            Action::ClickBubble => pick(
                "Bubble",
                labels_of(coordinator, ChartKind::Bubble),
                |label| Gesture::ClickBubble { label },
            )?,
        };

        let Some(gesture) = gesture else {
            continue;
        };

        if coordinator.handle(&gesture).is_none() {
            println!("Nothing happened (the chart ignored that gesture).");
            continue;
        }
        print(coordinator)?;
    }
}

fn print(coordinator: &Coordinator) -> Result<(), Box<dyn std::error::Error>> {
    let mut sink = TextSink::new(std::io::stdout().lock(), true);
    sink.write(&coordinator.snapshot())?;
    Ok(())
}

/// Prompts for one of `items` and wraps the choice in a gesture.
///
/// Returns `None` when there is nothing to choose from.
fn pick(
    prompt: &str,
    items: Vec<String>,
    gesture: impl FnOnce(String) -> Gesture,
) -> Result<Option<Gesture>, Box<dyn std::error::Error>> {
    if items.is_empty() {
        println!("Nothing to click.");
        return Ok(None);
    }

    let idx = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;

    Ok(items.into_iter().nth(idx).map(gesture))
}

fn pick_country(coordinator: &Coordinator) -> Result<Option<Gesture>, Box<dyn std::error::Error>> {
    let mut options = vec!["(none)".to_string()];
    options.extend(coordinator.countries().iter().cloned());

    let idx = Select::new()
        .with_prompt("Country")
        .items(&options)
        .default(0)
        .interact()?;

    let value = if idx == 0 {
        String::new()
    } else {
        options.swap_remove(idx)
    };
    Ok(Some(Gesture::ChooseCountry { value }))
}

fn move_slider(coordinator: &Coordinator) -> Result<Gesture, Box<dyn std::error::Error>> {
    let ChartView::Radial(view) = coordinator.view(ChartKind::Radial) else {
        return Err("circular bar plot has no slider".into());
    };

    let value: usize = Input::new()
        .with_prompt(format!(
            "Number of bars ({}-{})",
            view.slider.min, view.slider.max
        ))
        .default(view.slider.value)
        .interact_text()?;

    Ok(Gesture::MoveSlider { value })
}

/// Names of the map regions that have data.
fn region_names(coordinator: &Coordinator) -> Vec<String> {
    match coordinator.view(ChartKind::Map) {
        ChartView::Map(view) => view
            .regions
            .into_iter()
            .filter(|r| r.has_data())
            .map(|r| r.name)
            .collect(),
        _ => Vec::new(),
    }
}

/// Item labels currently drawn by a chart.
fn labels_of(coordinator: &Coordinator, kind: ChartKind) -> Vec<String> {
    match coordinator.view(kind) {
        ChartView::Donut(view) => view.slices.into_iter().map(|s| s.room_type).collect(),
        ChartView::Bar(view) => view.bars.into_iter().map(|b| b.label).collect(),
        ChartView::Radial(view) => view.bars.into_iter().map(|b| b.label).collect(),
        ChartView::Bubble(view) => view.bubbles.into_iter().map(|b| b.label).collect(),
        ChartView::Map(_) => Vec::new(),
    }
}
