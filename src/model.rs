//! Flight schedule data model.
//!
//! These types describe one operational day on the apron: flights, their
//! ground-handling milestones, annotation baselines and per-task lifecycle
//! logs. A loaded [`ScheduleData`] is treated as a read-mostly snapshot;
//! the only in-place mutations during a session are flight remarks and
//! control-directive appends, both routed through the GUI's schedule state.

use serde::{Deserialize, Serialize};

/// Sentinel for a time field with no data yet.
pub const TIME_NONE: &str = "--:--";

/// Returns true if a time string carries no usable value.
pub fn is_no_data(time: &str) -> bool {
    time.is_empty() || time == TIME_NONE
}

/// Ground-handling milestone category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "LAND")]
    Land,
    #[serde(rename = "IN-BLK")]
    InBlock,
    #[serde(rename = "UNLOAD")]
    Unload,
    #[serde(rename = "ATD")]
    Pushback,
    #[serde(rename = "BOARD")]
    Boarding,
    #[serde(rename = "ARR")]
    Arrival,
    #[serde(rename = "DEP")]
    Departure,
    #[serde(rename = "COBT")]
    DoorClose,
}

impl EventType {
    /// Short display code as shown on pills and in snapshots.
    pub fn code(&self) -> &'static str {
        match self {
            EventType::Land => "LAND",
            EventType::InBlock => "IN-BLK",
            EventType::Unload => "UNLOAD",
            EventType::Pushback => "ATD",
            EventType::Boarding => "BOARD",
            EventType::Arrival => "ARR",
            EventType::Departure => "DEP",
            EventType::DoorClose => "COBT",
        }
    }
}

/// Supplied status classification of a milestone.
///
/// The status is part of the snapshot, not derived by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventStatus {
    Completed,
    Scheduled,
    Active,
    Pending,
    Delayed,
    OvertimeCompleted,
    OvertimeIncomplete,
    Alert,
    Warning,
}

impl EventStatus {
    /// Operator-facing status text (fixed label set).
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Completed => "正常完成",
            EventStatus::Scheduled => "已计划",
            EventStatus::Active => "保障中",
            EventStatus::Pending => "未开始",
            EventStatus::Delayed => "延误",
            EventStatus::OvertimeCompleted => "超时完成",
            EventStatus::OvertimeIncomplete => "超时未完",
            EventStatus::Alert => "告警",
            EventStatus::Warning => "异常",
        }
    }
}

/// Task publication/acceptance progression, supplied by the source system.
///
/// Transitions are strictly forward-only in the data; the viewer never
/// computes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "未发布")]
    Unpublished,
    #[serde(rename = "已发布")]
    Published,
    #[serde(rename = "已领受")]
    Accepted,
    #[serde(rename = "到位")]
    InPosition,
    #[serde(rename = "开始")]
    Started,
    #[serde(rename = "结束")]
    Ended,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Unpublished => "未发布",
            TaskStatus::Published => "已发布",
            TaskStatus::Accepted => "已领受",
            TaskStatus::InPosition => "到位",
            TaskStatus::Started => "开始",
            TaskStatus::Ended => "结束",
        }
    }
}

/// Kind of an entry in a task's operational history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleKind {
    #[serde(rename = "创建")]
    Created,
    #[serde(rename = "发布")]
    Published,
    #[serde(rename = "领受")]
    Accepted,
    #[serde(rename = "到位")]
    InPosition,
    #[serde(rename = "开始")]
    Started,
    #[serde(rename = "结束")]
    Ended,
    #[serde(rename = "催办")]
    Urge,
    #[serde(rename = "预警")]
    Warning,
    #[serde(rename = "管控")]
    Control,
}

impl LifecycleKind {
    pub fn label(&self) -> &'static str {
        match self {
            LifecycleKind::Created => "创建",
            LifecycleKind::Published => "发布",
            LifecycleKind::Accepted => "领受",
            LifecycleKind::InPosition => "到位",
            LifecycleKind::Started => "开始",
            LifecycleKind::Ended => "结束",
            LifecycleKind::Urge => "催办",
            LifecycleKind::Warning => "预警",
            LifecycleKind::Control => "管控",
        }
    }

    /// Whether this entry is a system alert shown centered in the log view.
    pub fn is_system_alert(&self) -> bool {
        matches!(self, LifecycleKind::Urge | LifecycleKind::Warning)
    }
}

/// One append-only entry in a task's operational history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskLifecycleEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LifecycleKind,
    /// `MM-DD HH:MM` wall-clock stamp.
    pub timestamp: String,
    pub description: String,
}

/// One ground-handling milestone belonging to a flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Actual completion time, or the `--:--` sentinel.
    pub time_actual: String,
    /// Planned time, when the source supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_scheduled: Option<String>,
    pub status: EventStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_status: Option<TaskStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub personnel: Vec<String>,
    /// Operational history, most recent first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lifecycle: Vec<TaskLifecycleEvent>,
}

impl TimelineEvent {
    /// The time that anchors this event on the axis: scheduled when usable,
    /// else actual, else none (callers treat none as offset zero).
    pub fn anchor_time(&self) -> Option<&str> {
        if let Some(scheduled) = &self.time_scheduled {
            if !is_no_data(scheduled) {
                return Some(scheduled);
            }
        }
        if !is_no_data(&self.time_actual) {
            return Some(&self.time_actual);
        }
        None
    }
}

/// Annotation baseline kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    Connector,
    Label,
}

/// Baseline stroke style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dotted,
}

/// A labeled baseline bar drawn beneath a row, spanning a derived interval
/// such as a release or takeoff window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(rename = "type")]
    pub kind: AnnotationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_event_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_event_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub style: LineStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Scheduled movement category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlightType {
    #[default]
    #[serde(rename = "REG")]
    Regular,
    #[serde(rename = "CARGO")]
    Cargo,
    #[serde(rename = "EXTRA")]
    Extra,
    #[serde(rename = "FERRY")]
    Ferry,
    #[serde(rename = "DIV")]
    Diversion,
}

impl FlightType {
    pub fn label(&self) -> &'static str {
        match self {
            FlightType::Regular => "正班",
            FlightType::Cargo => "货班",
            FlightType::Extra => "加班",
            FlightType::Ferry => "调机",
            FlightType::Diversion => "备降",
        }
    }
}

/// Inbound leg progress label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrivalStatus {
    #[serde(rename = "前起")]
    PrevDeparted,
    #[serde(rename = "到达")]
    Arrived,
    #[serde(rename = "入位")]
    OnStand,
    #[serde(rename = "备降")]
    Diverted,
    #[serde(rename = "延误")]
    Delayed,
}

impl ArrivalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ArrivalStatus::PrevDeparted => "前起",
            ArrivalStatus::Arrived => "到达",
            ArrivalStatus::OnStand => "入位",
            ArrivalStatus::Diverted => "备降",
            ArrivalStatus::Delayed => "延误",
        }
    }
}

/// Outbound leg progress label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepartureStatus {
    #[serde(rename = "正常")]
    Normal,
    #[serde(rename = "允登")]
    BoardingOpen,
    #[serde(rename = "登机")]
    Boarding,
    #[serde(rename = "催登")]
    FinalCall,
    #[serde(rename = "关闭")]
    Closed,
    #[serde(rename = "延误")]
    Delayed,
}

impl DepartureStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DepartureStatus::Normal => "正常",
            DepartureStatus::BoardingOpen => "允登",
            DepartureStatus::Boarding => "登机",
            DepartureStatus::FinalCall => "催登",
            DepartureStatus::Closed => "关闭",
            DepartureStatus::Delayed => "延误",
        }
    }
}

/// Inbound descriptor: status plus the assigned stand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrivalInfo {
    pub status: ArrivalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stand: Option<String>,
}

/// Outbound descriptor: status plus the assigned gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartureInfo {
    pub status: DepartureStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,
}

/// Named time milestones of a flight. All fields are opaque labeled `HH:MM`
/// strings (or the sentinel); slot times (COBT/CTOT/ATOT) are never parsed
/// beyond display formatting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightTimes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ptd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cobt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atot: Option<String>,
}

/// One scheduled movement (possibly codeshared) through the apron.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub id: String,
    pub flight_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codeshare: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default)]
    pub flight_type: FlightType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arr_info: Option<ArrivalInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dep_info: Option<DepartureInfo>,
    #[serde(default)]
    pub times: FlightTimes,
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    /// Free-text remarks, editable from the detail panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl Flight {
    /// First flight number when the display string carries a codeshare pair
    /// ("CA1538 / CA1539").
    pub fn primary_flight_no(&self) -> &str {
        self.flight_no.split(" / ").next().unwrap_or("")
    }

    /// True if either leg is flagged delayed.
    pub fn is_delayed(&self) -> bool {
        self.arr_info
            .as_ref()
            .map(|a| a.status == ArrivalStatus::Delayed)
            .unwrap_or(false)
            || self
                .dep_info
                .as_ref()
                .map(|d| d.status == DepartureStatus::Delayed)
                .unwrap_or(false)
    }

    pub fn event(&self, event_id: &str) -> Option<&TimelineEvent> {
        self.events.iter().find(|e| e.id == event_id)
    }

    pub fn event_mut(&mut self, event_id: &str) -> Option<&mut TimelineEvent> {
        self.events.iter_mut().find(|e| e.id == event_id)
    }
}

/// Snapshot-level metadata carried in the header line of a schedule file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    pub version: String,
    pub airport: String,
    /// Operational date as `YYYY-MM-DD`.
    pub date: String,
    /// Hour at which the operational day starts (times before it roll over).
    pub day_start_hour: i32,
}

impl ScheduleMetadata {
    /// Day-of-month digits used by the `HH:MM(DD)` display format.
    pub fn day_of_month(&self) -> &str {
        self.date.rsplit('-').next().unwrap_or("")
    }
}

/// An immutable snapshot of one operational day.
#[derive(Debug, Clone)]
pub struct ScheduleData {
    pub metadata: ScheduleMetadata,
    pub flights: Vec<Flight>,
}

impl ScheduleData {
    pub fn flight(&self, flight_id: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.id == flight_id)
    }

    pub fn flight_mut(&mut self, flight_id: &str) -> Option<&mut Flight> {
        self.flights.iter_mut().find(|f| f.id == flight_id)
    }

    pub fn total_events(&self) -> usize {
        self.flights.iter().map(|f| f.events.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(scheduled: Option<&str>, actual: &str) -> TimelineEvent {
        TimelineEvent {
            id: "e1".to_string(),
            label: "落地".to_string(),
            event_type: EventType::Land,
            time_actual: actual.to_string(),
            time_scheduled: scheduled.map(str::to_string),
            status: EventStatus::Completed,
            task_status: None,
            department: None,
            personnel: Vec::new(),
            lifecycle: Vec::new(),
        }
    }

    #[test]
    fn test_anchor_prefers_scheduled() {
        let e = event(Some("09:00"), "09:05");
        assert_eq!(e.anchor_time(), Some("09:00"));
    }

    #[test]
    fn test_anchor_falls_back_to_actual() {
        let e = event(Some(TIME_NONE), "09:05");
        assert_eq!(e.anchor_time(), Some("09:05"));

        let e = event(None, "09:05");
        assert_eq!(e.anchor_time(), Some("09:05"));
    }

    #[test]
    fn test_anchor_none_when_no_data() {
        let e = event(Some(TIME_NONE), TIME_NONE);
        assert_eq!(e.anchor_time(), None);
    }

    #[test]
    fn test_event_serde_uses_wire_names() {
        let e = event(Some("09:00"), "09:05");
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["type"], "LAND");
        assert_eq!(json["status"], "completed");
        assert_eq!(json["time_scheduled"], "09:00");

        let back: TimelineEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back.event_type, EventType::Land);
    }

    #[test]
    fn test_status_serde_kebab_case() {
        let v = serde_json::to_value(EventStatus::OvertimeIncomplete).unwrap();
        assert_eq!(v, "overtime-incomplete");
        let back: EventStatus = serde_json::from_value(v).unwrap();
        assert_eq!(back, EventStatus::OvertimeIncomplete);
    }

    #[test]
    fn test_lifecycle_kind_serde_labels() {
        let v = serde_json::to_value(LifecycleKind::Control).unwrap();
        assert_eq!(v, "管控");
        assert!(LifecycleKind::Urge.is_system_alert());
        assert!(!LifecycleKind::Control.is_system_alert());
    }

    #[test]
    fn test_primary_flight_no_splits_codeshare_pair() {
        let mut flight = Flight {
            id: "1".to_string(),
            flight_no: "CA1538 / CA1539".to_string(),
            codeshare: Some("CA1539".to_string()),
            stand: None,
            gate: None,
            registration: None,
            aircraft_type: None,
            aircraft_category: None,
            route: None,
            flight_type: FlightType::default(),
            arr_info: None,
            dep_info: None,
            times: FlightTimes::default(),
            events: Vec::new(),
            annotations: Vec::new(),
            remarks: None,
        };
        assert_eq!(flight.primary_flight_no(), "CA1538");

        flight.flight_no = "MU5206".to_string();
        assert_eq!(flight.primary_flight_no(), "MU5206");
    }

    #[test]
    fn test_day_of_month() {
        let meta = ScheduleMetadata {
            version: "1.0".to_string(),
            airport: "CTU".to_string(),
            date: "2026-02-05".to_string(),
            day_start_hour: 8,
        };
        assert_eq!(meta.day_of_month(), "05");
    }
}
