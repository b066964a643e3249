//! This is an example of how sticky-calendar can be used.
//! This binary scripts a few user gestures on a board, and prints its state after each of them.
//!
//! You can set the RUST_LOG environment variable to display more info about what happens.

use chrono::NaiveDate;

use sticky_calendar::config::Settings;
use sticky_calendar::drag::UniformRows;
use sticky_calendar::ui::{ClickTarget, UiEvent};
use sticky_calendar::utils::{print_board, print_calendar};
use sticky_calendar::{Board, MemoryCalendar, TaskForm};

const ROW_HEIGHT: f64 = 40.0;

fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        None => Settings::default(),
        Some(path) => match std::fs::read_to_string(&path) {
            Err(err) => {
                log::warn!("Unable to read settings file {:?}: {}. Using default settings", path, err);
                Settings::default()
            },
            Ok(content) => Settings::from_json(&content).unwrap_or_else(|err| {
                log::warn!("{}. Using default settings", err);
                Settings::default()
            }),
        },
    };

    let day = match NaiveDate::from_ymd_opt(2024, 6, 3) {
        Some(day) => day,
        None => return,
    };
    let calendar = MemoryCalendar::from_settings(&settings, day);
    let mut board = Board::with_settings(calendar, UniformRows::new(0.0, ROW_HEIGHT), &settings);

    board.select_date(day);
    for (text, priority, recurrence) in [("Standup", "green", "daily"), ("Review", "yellow", "none"), ("Deploy", "red", "none")].iter() {
        let form = TaskForm {
            text: text.to_string(),
            start_time: "09:00".to_string(),
            end_time: "09:15".to_string(),
            priority: priority.to_string(),
            recurrence: recurrence.to_string(),
            category: "work".to_string(),
            clock_format: String::new(),
        };
        if let Err(err) = board.handle(UiEvent::Submit(form)) {
            println!("{}", err.notice());
        }
        board.select_date(day);
    }
    print_calendar(board.calendar());
    print_board(&board);

    println!("---- after sorting by priority -----");
    let _ = board.handle(UiEvent::SortByPriority);
    print_board(&board);

    println!("---- after dragging the last item to the top -----");
    let order = board.list().order();
    if let Some(last) = order.last() {
        let _ = board.handle(UiEvent::DragStart(*last));
        let _ = board.handle(UiEvent::DragOver { pointer_y: ROW_HEIGHT / 4.0 });
        let _ = board.handle(UiEvent::DragEnd);
    }
    print_board(&board);

    println!("---- after completing the first task and showing completed tasks only -----");
    if let Some(first) = board.list().order().first() {
        let _ = board.handle(UiEvent::ItemClicked { id: *first, target: ClickTarget::Body });
    }
    let _ = board.handle(UiEvent::Filter("completed".to_string()));
    print_board(&board);
}
