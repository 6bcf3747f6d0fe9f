//! Starting data for a fresh session: four courses and a month of events.

use crate::course::{Course, CourseColor};
use crate::event::{EventType, ScheduleEvent};
use crate::grid::YearMonth;

pub fn courses() -> Vec<Course> {
    let course = |id: &str, title: &str, instructor: &str, progress: u8, color, quiz_topic: &str| Course {
        id: id.to_string(),
        title: title.to_string(),
        instructor: instructor.to_string(),
        progress,
        color,
        quiz_topic: quiz_topic.to_string(),
    };

    vec![
        course("1", "Quantum Physics", "Dr. Evelyn Reed", 75, CourseColor::Blue, "Quantum Mechanics"),
        course("2", "Advanced Algebra", "Prof. David Chen", 45, CourseColor::Purple, "Linear Algebra"),
        course("3", "World History: 1900-Present", "Dr. Maria Garcia", 90, CourseColor::Green, "The Cold War"),
        course("4", "Creative Writing", "Mr. Samuel Jones", 60, CourseColor::Orange, "Literary Devices"),
    ]
}

/// Events spread over `month`, already in date order.
pub fn events(month: YearMonth) -> Vec<ScheduleEvent> {
    use EventType::*;

    let rows: [(&str, &str, &str, u32, &str, EventType); 11] = [
        ("e1", "1", "Quantum Physics Lecture", 3, "10:00 AM", Lecture),
        ("e2", "2", "Algebra Problem Set Due", 5, "11:59 PM", Deadline),
        ("e3", "3", "History Mid-term Study Group", 8, "2:00 PM", Meeting),
        ("e4", "4", "Poetry Workshop", 10, "4:30 PM", Meeting),
        ("e5", "1", "Lab Report Submission", 12, "5:00 PM", Deadline),
        ("e6", "1", "Team Meeting: Project Alpha", 15, "11:00 AM", Meeting),
        ("e7", "2", "Guest Lecture: Dr. Smith", 17, "1:00 PM", Lecture),
        ("e8", "3", "Essay Outline Due", 20, "11:59 PM", Deadline),
        ("e9", "4", "Short Story Draft Review", 22, "3:00 PM", Meeting),
        ("e10", "2", "Final Exam Review Session", 25, "6:00 PM", Meeting),
        ("e11", "3", "Final Paper Due", 28, "11:59 PM", Deadline),
    ];

    rows.into_iter()
        .map(|(id, course_id, title, day, time, event_type)| ScheduleEvent {
            id: id.to_string(),
            course_id: course_id.to_string(),
            title: title.to_string(),
            date: month.date_key(day),
            time: time.to_string(),
            event_type,
        })
        .collect()
}
