//! Some utility functions

use crate::board::Board;
use crate::calendar::memory_calendar::MemoryCalendar;
use crate::list::ListItem;
use crate::traits::{CalendarSurface, Layout};

/// A debug utility that pretty-prints a list item
pub fn print_item(item: &ListItem) {
    let completion = if item.is_completed() { "✓" } else { " " };
    let visibility = if item.is_visible() { " " } else { "h" };
    let drag = if item.is_dragging() { "~" } else { " " };
    println!("    {}{}{} {}\t[{}]\t{}", completion, visibility, drag, item.label(), item.classes().join(" "), item.task_id());
}

/// A debug utility that pretty-prints the list of a board
pub fn print_board<C: CalendarSurface, L: Layout>(board: &Board<C, L>) {
    println!("LIST ({} items, progress {:.0}%)", board.list().len(), board.progress());
    for item in board.list().items() {
        print_item(item);
    }
}

/// A debug utility that pretty-prints a calendar
pub fn print_calendar(calendar: &MemoryCalendar) {
    let (first, last) = calendar.visible_range();
    println!("CAL {} ({} view, {} to {})", calendar.title(), calendar.view(), first, last);
    for (handle, event) in calendar.events() {
        println!("    {}\t{} -> {}\t{}\t{}", handle, event.start(), event.end(), event.colors().background_css(), event.title());
    }
}
