pub mod model;
pub mod schedule_reader;
pub mod schedule_writer;
pub mod virtual_schedule;
pub mod theme;

// Export the data model
pub use model::{
    Annotation, AnnotationKind, ArrivalInfo, ArrivalStatus, DepartureInfo, DepartureStatus,
    EventStatus, EventType, Flight, FlightTimes, FlightType, LifecycleKind, LineStyle,
    ScheduleData, ScheduleMetadata, TaskLifecycleEvent, TaskStatus, TimelineEvent,
    is_no_data, TIME_NONE,
};

// Export snapshot I/O
pub use schedule_reader::{parse_schedule, ScheduleReader, SCHEDULE_FORMAT_VERSION};
pub use schedule_writer::ScheduleWriter;

// Export the demo schedule generator
pub use virtual_schedule::generate_demo_schedule;

// Export theme support
pub use theme::{adjust_brightness, hex_to_color32, with_alpha, Theme, ThemeColors, ThemeManager};
