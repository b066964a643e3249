//! End-to-end scenarios, driven through a board like a user would

use chrono::NaiveDate;

use sticky_calendar::calendar::CalendarView;
use sticky_calendar::drag::UniformRows;
use sticky_calendar::traits::CalendarSurface;
use sticky_calendar::ui::{ClickTarget, UiEvent};
use sticky_calendar::{Board, MemoryCalendar, TaskForm, TaskId};

const ROW_HEIGHT: f64 = 40.0;

struct Scenario {
    board: Board<MemoryCalendar, UniformRows>,
    day: NaiveDate,
}

impl Scenario {
    fn new(y: i32, m: u32, d: u32) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let day = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let board = Board::new(
            MemoryCalendar::new(CalendarView::Month, day),
            UniformRows::new(0.0, ROW_HEIGHT),
        );
        Self { board, day }
    }

    fn create(&mut self, text: &str, start: &str, end: &str, priority: &str, recurrence: &str) -> TaskId {
        self.board.handle(UiEvent::DateClicked(self.day)).unwrap();
        self.board.handle(UiEvent::Submit(TaskForm {
            text: text.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            priority: priority.to_string(),
            recurrence: recurrence.to_string(),
            category: "work".to_string(),
            clock_format: "24".to_string(),
        })).unwrap();
        *self.board.list().items().last().unwrap().task_id()
    }

    fn names(&self) -> Vec<String> {
        self.board.tasks().iter().map(|t| t.name().to_string()).collect()
    }
}


#[test]
fn test_standup_lifecycle() {
    let mut scenario = Scenario::new(2024, 6, 3);
    let id = scenario.create("Standup", "09:00", "09:15", "red", "none");

    let board = &scenario.board;
    assert_eq!(board.list().len(), 1);
    let item = board.list().get(&id).unwrap();
    assert!(item.has_class("priority-red"));
    assert_eq!(item.label(), "Standup (09:00 - 09:15)");

    assert_eq!(board.calendar().event_count(), 1);
    let handle = board.event_of(&id).unwrap();
    let event = board.calendar().get_event(handle).unwrap();
    assert_eq!(event.colors().background_css(), "rgba(255, 0, 0, 0.5)");
    assert_eq!(event.title(), "Standup");
    assert_eq!(event.start(), scenario.day.and_hms_opt(9, 0, 0).unwrap());
    assert_eq!(event.end(), scenario.day.and_hms_opt(9, 15, 0).unwrap());
    assert_eq!(board.calendar().events_on(scenario.day).len(), 1);
    assert_eq!(board.progress(), 0.0);

    scenario.board.handle(UiEvent::ItemClicked { id, target: ClickTarget::Body }).unwrap();
    assert_eq!(scenario.board.progress(), 100.0);
    assert!(scenario.board.list().get(&id).unwrap().has_class("completed"));

    scenario.board.handle(UiEvent::ItemClicked { id, target: ClickTarget::DeleteButton }).unwrap();
    assert!(scenario.board.list().is_empty());
    assert_eq!(scenario.board.progress(), 0.0);
    assert!(scenario.board.store().is_empty());
    assert_eq!(scenario.board.calendar().event_count(), 0);
}

#[test]
fn test_drag_last_item_above_the_first() {
    let mut scenario = Scenario::new(2024, 6, 3);
    scenario.create("A", "09:00", "10:00", "green", "none");
    scenario.create("B", "10:00", "11:00", "green", "none");
    let c = scenario.create("C", "11:00", "12:00", "green", "none");

    scenario.board.handle(UiEvent::DragStart(c)).unwrap();
    // Above the middle of A
    scenario.board.handle(UiEvent::DragOver { pointer_y: ROW_HEIGHT / 2.0 - 1.0 }).unwrap();
    assert_eq!(scenario.names(), vec!["C", "A", "B"]);
    scenario.board.handle(UiEvent::DragEnd).unwrap();

    assert_eq!(scenario.names(), vec!["C", "A", "B"]);
    assert!(scenario.board.list().items().iter().all(|i| i.is_dragging() == false));
}

#[test]
fn test_drag_preview_follows_the_pointer() {
    let mut scenario = Scenario::new(2024, 6, 3);
    let a = scenario.create("A", "09:00", "10:00", "green", "none");
    scenario.create("B", "10:00", "11:00", "green", "none");
    scenario.create("C", "11:00", "12:00", "green", "none");

    scenario.board.drag_start(&a);
    scenario.board.drag_over(ROW_HEIGHT * 2.5);
    assert_eq!(scenario.names(), vec!["B", "C", "A"]);
    scenario.board.drag_over(ROW_HEIGHT * 1.2);
    assert_eq!(scenario.names(), vec!["B", "A", "C"]);
    scenario.board.drag_end();

    // Moves after the release have no effect
    scenario.board.drag_over(0.0);
    assert_eq!(scenario.names(), vec!["B", "A", "C"]);
}

#[test]
fn test_sort_then_filter() {
    let mut scenario = Scenario::new(2024, 6, 3);
    scenario.create("green 1", "09:00", "10:00", "green", "none");
    let red = scenario.create("red 1", "09:00", "10:00", "red", "none");
    scenario.create("yellow 1", "09:00", "10:00", "yellow", "none");
    scenario.create("red 2", "09:00", "10:00", "red", "none");

    scenario.board.handle(UiEvent::SortByPriority).unwrap();
    assert_eq!(scenario.names(), vec!["red 1", "red 2", "yellow 1", "green 1"]);

    scenario.board.handle(UiEvent::Filter("priority-red".to_string())).unwrap();
    let visible: Vec<&str> = scenario.board.list().visible_items().map(|i| i.label()).collect();
    assert_eq!(visible, vec!["red 1 (09:00 - 10:00)", "red 2 (09:00 - 10:00)"]);

    scenario.board.handle(UiEvent::ItemClicked { id: red, target: ClickTarget::Body }).unwrap();
    scenario.board.handle(UiEvent::Filter("completed".to_string())).unwrap();
    assert_eq!(scenario.board.list().visible_items().count(), 1);
    assert_eq!(scenario.board.progress(), 25.0);

    scenario.board.handle(UiEvent::Filter("all".to_string())).unwrap();
    assert_eq!(scenario.board.list().visible_items().count(), 4);
    assert_eq!(scenario.names(), vec!["red 1", "red 2", "yellow 1", "green 1"]);
}

#[test]
fn test_monthly_task_near_the_end_of_the_month() {
    let mut scenario = Scenario::new(2024, 1, 31);
    let id = scenario.create("Rent", "08:00", "08:30", "yellow", "monthly");
    let calendar = scenario.board.calendar();
    assert_eq!(calendar.event_count(), 11);

    let main = scenario.board.event_of(&id).unwrap();
    let dates: Vec<NaiveDate> = calendar.events()
        .filter(|(handle, _)| *handle != main)
        .map(|(_, event)| event.start().date())
        .collect();
    // February has no 31st: the first occurrence spills over into March
    assert_eq!(dates.first(), NaiveDate::from_ymd_opt(2024, 3, 2).as_ref());
    assert_eq!(dates.last(), NaiveDate::from_ymd_opt(2024, 12, 2).as_ref());

    // The January grid only shows the main event, and February shows nothing
    assert_eq!(calendar.visible_events().len(), 1);
    let mut next_month = calendar.clone();
    next_month.next();
    assert!(next_month.visible_events().is_empty());
    next_month.next();
    assert_eq!(next_month.visible_events().len(), 1);
    assert_eq!(next_month.visible_events()[0].1.title(), "Rent");
}

#[test]
fn test_edit_round_trip() {
    let mut scenario = Scenario::new(2024, 6, 3);
    let first = scenario.create("Standup", "09:00", "09:15", "red", "none");
    scenario.create("Lunch", "12:00", "13:00", "green", "none");
    scenario.board.toggle_completion(&first);

    scenario.board.handle(UiEvent::ItemClicked { id: first, target: ClickTarget::EditButton }).unwrap();
    assert_eq!(scenario.names(), vec!["Lunch"]);
    assert_eq!(scenario.board.calendar().event_count(), 1);
    assert_eq!(scenario.board.progress(), 0.0);
    assert!(scenario.board.modal().is_open());
    assert_eq!(scenario.board.modal().heading(), "Tasks for Mon Jun 03 2024");

    let mut form = scenario.board.modal().form().clone();
    form.text = "Daily standup".to_string();
    form.end_time = "09:30".to_string();
    scenario.board.handle(UiEvent::Submit(form)).unwrap();

    assert_eq!(scenario.names(), vec!["Lunch", "Daily standup"]);
    assert_eq!(scenario.board.calendar().event_count(), 2);
    assert_eq!(scenario.board.store().len(), 2);
    // The recreated task starts uncompleted
    assert_eq!(scenario.board.tasks()[1].completed(), false);
}
