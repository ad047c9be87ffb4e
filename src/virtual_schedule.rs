//! In-memory demo schedule generation.
//!
//! Builds a deterministic, realistic one-day apron snapshot without any
//! file input: a curated set of flights covering every status and lifecycle
//! shape the viewer renders, plus optional seeded-random filler flights.
//! Used by the GUI's "Demo Schedule" action and the `apron-schedgen` CLI.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{
    Annotation, AnnotationKind, ArrivalInfo, ArrivalStatus, DepartureInfo, DepartureStatus,
    EventStatus, EventType, Flight, FlightTimes, FlightType, LifecycleKind, LineStyle,
    ScheduleData, ScheduleMetadata, TaskLifecycleEvent, TaskStatus, TimelineEvent, TIME_NONE,
};

const DEMO_AIRPORT: &str = "CTU";
const DEMO_DATE: &str = "2026-02-05";
const DEMO_DAY_START_HOUR: i32 = 8;

const AIRLINES: &[&str] = &["CA", "MU", "CZ", "HU", "SC", "ZH", "3U", "GJ", "EU"];
const CITY_PAIRS: &[&str] = &["PEK", "SHA", "CAN", "SZX", "HGH", "CKG", "XIY", "KMG", "WUH", "TAO"];
const AIRCRAFT_TYPES: &[&str] = &["A320", "A321", "A330", "B737", "B738", "B787"];

/// Generates the demo snapshot.
///
/// The same `(seed, extra_flights)` pair always produces an identical
/// snapshot, so generated files and in-app demo data are reproducible.
pub fn generate_demo_schedule(seed: u64, extra_flights: usize) -> ScheduleData {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut flights = curated_flights();
    let base = flights.len();
    for i in 0..extra_flights {
        flights.push(random_flight(&mut rng, base + i + 1));
    }

    ScheduleData {
        metadata: ScheduleMetadata {
            version: crate::schedule_reader::SCHEDULE_FORMAT_VERSION.to_string(),
            airport: DEMO_AIRPORT.to_string(),
            date: DEMO_DATE.to_string(),
            day_start_hour: DEMO_DAY_START_HOUR,
        },
        flights,
    }
}

fn hhmm(minutes_of_day: i32) -> String {
    let m = minutes_of_day.rem_euclid(24 * 60);
    format!("{:02}:{:02}", m / 60, m % 60)
}

fn event(
    id: &str,
    label: &str,
    event_type: EventType,
    scheduled: Option<&str>,
    actual: &str,
    status: EventStatus,
) -> TimelineEvent {
    TimelineEvent {
        id: id.to_string(),
        label: label.to_string(),
        event_type,
        time_actual: actual.to_string(),
        time_scheduled: scheduled.map(str::to_string),
        status,
        task_status: None,
        department: None,
        personnel: Vec::new(),
        lifecycle: Vec::new(),
    }
}

fn lifecycle(id: &str, kind: LifecycleKind, timestamp: &str, description: &str) -> TaskLifecycleEvent {
    TaskLifecycleEvent {
        id: id.to_string(),
        kind,
        timestamp: timestamp.to_string(),
        description: description.to_string(),
    }
}

fn window(start: &str, end: &str, label: &str) -> Annotation {
    Annotation {
        kind: AnnotationKind::Connector,
        start_event_id: None,
        end_event_id: None,
        start_time: Some(start.to_string()),
        end_time: Some(end.to_string()),
        label: Some(label.to_string()),
        style: LineStyle::Solid,
        color: Some("gray".to_string()),
    }
}

/// Hand-written flights exercising every rendering path: a completed
/// turnaround with a deep lifecycle log, an in-progress boarding, a delayed
/// departure, an inbound leg still airborne, and a positioning flight.
fn curated_flights() -> Vec<Flight> {
    let mut flights = Vec::new();

    // Completed arrival leg with a rich task history on the landing event.
    let mut landing = event(
        "e1",
        "落地",
        EventType::Land,
        Some("09:00"),
        "09:00",
        EventStatus::OvertimeCompleted,
    );
    landing.task_status = Some(TaskStatus::Ended);
    landing.department = Some("机务保障".to_string());
    landing.personnel = vec!["张三".to_string(), "李四".to_string()];
    landing.lifecycle = vec![
        lifecycle("lc1", LifecycleKind::Ended, "02-05 09:00", "任务完成"),
        lifecycle("lc2", LifecycleKind::Started, "02-05 08:55", "开始执行任务"),
        lifecycle("lc3", LifecycleKind::InPosition, "02-05 08:50", "人员到达机位"),
        lifecycle("lc4", LifecycleKind::Accepted, "02-05 08:30", "张三领受任务"),
        lifecycle("lc5", LifecycleKind::Published, "02-05 08:20", "任务已发布"),
        lifecycle("lc6", LifecycleKind::Warning, "02-05 08:15", "前序航班延误，可能影响保障"),
        lifecycle("lc7", LifecycleKind::Urge, "02-05 08:10", "请尽快确认人员到位情况"),
        lifecycle("lc8", LifecycleKind::Created, "02-04 17:22", "任务创建"),
    ];

    let mut docking = event(
        "e2",
        "靠桥",
        EventType::InBlock,
        Some("09:15"),
        "09:25",
        EventStatus::OvertimeCompleted,
    );
    docking.task_status = Some(TaskStatus::Started);
    docking.department = Some("监装监卸".to_string());
    docking.personnel = vec!["王五".to_string()];
    docking.lifecycle = vec![
        lifecycle("lc9", LifecycleKind::Urge, "02-05 09:34", "离计划保障时间还剩1分钟"),
        lifecycle("lc10", LifecycleKind::Warning, "02-05 09:32", "装机结束超时14分钟"),
        lifecycle("lc11", LifecycleKind::Created, "02-04 17:22", "任务创建"),
    ];

    flights.push(Flight {
        id: "1".to_string(),
        flight_no: "CA1538 / CA1539".to_string(),
        codeshare: Some("CA1539".to_string()),
        stand: Some("203".to_string()),
        gate: None,
        registration: Some("B-6789".to_string()),
        aircraft_type: Some("A320".to_string()),
        aircraft_category: Some("M".to_string()),
        route: Some("PEK - CTU - SHA".to_string()),
        flight_type: FlightType::Regular,
        arr_info: Some(ArrivalInfo {
            status: ArrivalStatus::Arrived,
            stand: Some("243".to_string()),
        }),
        dep_info: Some(DepartureInfo {
            status: DepartureStatus::Normal,
            gate: Some("15".to_string()),
        }),
        times: FlightTimes {
            ptd: Some("07:30".to_string()),
            sta: Some("09:15".to_string()),
            eta: Some("09:00".to_string()),
            ata: Some("09:02".to_string()),
            std: Some("10:45".to_string()),
            etd: Some("10:50".to_string()),
            cobt: Some("10:20".to_string()),
            ctot: Some("10:35".to_string()),
            atot: Some("10:48".to_string()),
            ..Default::default()
        },
        events: vec![landing, docking],
        annotations: vec![
            window("09:00", "10:00", "放行"),
            window("10:00", "11:00", "起飞"),
        ],
        remarks: Some("前序航班延误，预计晚点30分钟。VIP旅客3人。".to_string()),
    });

    // Tight turnaround, departure still pending.
    flights.push(Flight {
        id: "2".to_string(),
        flight_no: "MU5206".to_string(),
        codeshare: Some("MU5207".to_string()),
        stand: None,
        gate: None,
        registration: Some("B-2301".to_string()),
        aircraft_type: Some("A321".to_string()),
        aircraft_category: Some("M".to_string()),
        route: Some("SHA - CTU - CAN".to_string()),
        flight_type: FlightType::Regular,
        arr_info: Some(ArrivalInfo {
            status: ArrivalStatus::OnStand,
            stand: Some("317L".to_string()),
        }),
        dep_info: Some(DepartureInfo {
            status: DepartureStatus::Boarding,
            gate: Some("32".to_string()),
        }),
        times: FlightTimes {
            sta: Some("09:40".to_string()),
            std: Some("11:00".to_string()),
            cobt: Some("09:30".to_string()),
            ctot: Some("09:45".to_string()),
            atot: Some("09:55".to_string()),
            ..Default::default()
        },
        events: vec![
            event("e3", "落地", EventType::Land, Some("09:40"), "09:40", EventStatus::OvertimeCompleted),
            event("e4", "靠桥", EventType::InBlock, Some("09:50"), "10:00", EventStatus::OvertimeCompleted),
            event("e5", "开始卸载", EventType::Unload, Some("10:00"), "10:05", EventStatus::OvertimeCompleted),
            event("e6", "起飞", EventType::Departure, Some("11:00"), TIME_NONE, EventStatus::Warning),
        ],
        annotations: vec![
            window("09:30", "10:30", "放行"),
            window("10:30", "11:30", "起飞"),
        ],
        remarks: Some("过站时间紧张，请关注保障进度。".to_string()),
    });

    // Delayed departure: everything overdue.
    flights.push(Flight {
        id: "3".to_string(),
        flight_no: "CZ6892".to_string(),
        codeshare: Some("CZ6893".to_string()),
        stand: None,
        gate: None,
        registration: None,
        aircraft_type: Some("B738".to_string()),
        aircraft_category: Some("M".to_string()),
        route: Some("HGH - CTU - SZX".to_string()),
        flight_type: FlightType::Regular,
        arr_info: Some(ArrivalInfo {
            status: ArrivalStatus::OnStand,
            stand: Some("243L".to_string()),
        }),
        dep_info: Some(DepartureInfo {
            status: DepartureStatus::Delayed,
            gate: Some("08".to_string()),
        }),
        times: FlightTimes {
            std: Some("10:10".to_string()),
            etd: Some("11:30".to_string()),
            cobt: Some("10:35".to_string()),
            ..Default::default()
        },
        events: vec![
            event("e7", "登机", EventType::Boarding, Some("10:10"), TIME_NONE, EventStatus::OvertimeIncomplete),
            event("e8", "关舱门", EventType::DoorClose, Some("10:35"), TIME_NONE, EventStatus::OvertimeIncomplete),
            event("e9", "推出", EventType::Pushback, Some("10:45"), TIME_NONE, EventStatus::Warning),
        ],
        annotations: vec![
            window("10:10", "11:10", "放行"),
            window("10:35", "11:35", "起飞"),
        ],
        remarks: None,
    });

    // Departure completed end to end.
    flights.push(Flight {
        id: "4".to_string(),
        flight_no: "HU7856".to_string(),
        codeshare: Some("HU7857".to_string()),
        stand: None,
        gate: None,
        registration: Some("B-5167".to_string()),
        aircraft_type: Some("B787".to_string()),
        aircraft_category: Some("H".to_string()),
        route: Some("CKG - CTU - XIY".to_string()),
        flight_type: FlightType::Regular,
        arr_info: Some(ArrivalInfo {
            status: ArrivalStatus::Arrived,
            stand: Some("318".to_string()),
        }),
        dep_info: Some(DepartureInfo {
            status: DepartureStatus::Closed,
            gate: Some("15".to_string()),
        }),
        times: FlightTimes {
            std: Some("10:00".to_string()),
            atd: Some("10:18".to_string()),
            cobt: Some("10:00".to_string()),
            ..Default::default()
        },
        events: vec![
            event("e10", "开始登机", EventType::Boarding, Some("09:30"), "09:30", EventStatus::OvertimeCompleted),
            event("e11", "登机完成", EventType::Boarding, Some("09:50"), "09:55", EventStatus::OvertimeCompleted),
            event("e12", "关舱门", EventType::DoorClose, Some("10:00"), "10:00", EventStatus::OvertimeCompleted),
            event("e13", "推出", EventType::Pushback, Some("10:05"), "10:08", EventStatus::OvertimeCompleted),
            event("e14", "起飞", EventType::Departure, Some("10:15"), "10:18", EventStatus::OvertimeCompleted),
        ],
        annotations: vec![
            window("09:30", "10:30", "放行"),
            window("10:08", "11:08", "起飞"),
        ],
        remarks: None,
    });

    // Inbound leg still airborne: alerts on the projected milestones.
    flights.push(Flight {
        id: "5".to_string(),
        flight_no: "ZH9152".to_string(),
        codeshare: Some("ZH9153".to_string()),
        stand: None,
        gate: None,
        registration: None,
        aircraft_type: Some("A330".to_string()),
        aircraft_category: Some("H".to_string()),
        route: Some("NKG - CTU - TAO".to_string()),
        flight_type: FlightType::Regular,
        arr_info: Some(ArrivalInfo {
            status: ArrivalStatus::PrevDeparted,
            stand: Some("305".to_string()),
        }),
        dep_info: Some(DepartureInfo {
            status: DepartureStatus::Normal,
            gate: Some("06".to_string()),
        }),
        times: FlightTimes {
            sta: Some("11:15".to_string()),
            cobt: Some(TIME_NONE.to_string()),
            ..Default::default()
        },
        events: vec![
            event("e15", "预计落地", EventType::Land, Some("11:15"), TIME_NONE, EventStatus::Alert),
            event("e16", "预计靠桥", EventType::InBlock, Some("11:28"), TIME_NONE, EventStatus::Alert),
        ],
        annotations: vec![
            window("10:45", "11:45", "放行"),
            window("11:15", "12:15", "起飞"),
        ],
        remarks: None,
    });

    // Positioning flight with crew milestones only.
    flights.push(Flight {
        id: "6".to_string(),
        flight_no: "3U8888".to_string(),
        codeshare: Some("3U8663".to_string()),
        stand: Some("205".to_string()),
        gate: None,
        registration: Some("B-325J".to_string()),
        aircraft_type: Some("A320".to_string()),
        aircraft_category: Some("M".to_string()),
        route: Some("TNA - CTU - CSX".to_string()),
        flight_type: FlightType::Ferry,
        arr_info: Some(ArrivalInfo {
            status: ArrivalStatus::OnStand,
            stand: Some("318A".to_string()),
        }),
        dep_info: Some(DepartureInfo {
            status: DepartureStatus::Normal,
            gate: Some("12".to_string()),
        }),
        times: FlightTimes {
            std: Some("11:00".to_string()),
            cobt: Some(TIME_NONE.to_string()),
            ..Default::default()
        },
        events: vec![
            event("e17", "机组就位", EventType::Boarding, Some("11:00"), TIME_NONE, EventStatus::Warning),
            event("e18", "放行", EventType::DoorClose, Some("11:30"), TIME_NONE, EventStatus::Warning),
        ],
        annotations: vec![
            window("11:00", "12:00", "放行"),
            window("11:30", "12:30", "起飞"),
        ],
        remarks: Some("重要货物，优先保障。".to_string()),
    });

    flights
}

/// Builds one seeded-random filler flight in the demo's time window.
fn random_flight(rng: &mut StdRng, ordinal: usize) -> Flight {
    let airline = AIRLINES[rng.gen_range(0..AIRLINES.len())];
    let number = rng.gen_range(1000..9999);
    let flight_no = format!("{}{}", airline, number);

    let origin = CITY_PAIRS[rng.gen_range(0..CITY_PAIRS.len())];
    let dest = CITY_PAIRS[rng.gen_range(0..CITY_PAIRS.len())];

    // Arrival between 08:30 and 20:00, one event every 10-25 minutes.
    let arrival_min = rng.gen_range(8 * 60 + 30..20 * 60);
    let mut cursor = arrival_min;

    let specs: &[(&str, EventType)] = &[
        ("落地", EventType::Land),
        ("靠桥", EventType::InBlock),
        ("登机", EventType::Boarding),
        ("推出", EventType::Pushback),
    ];
    let event_count = rng.gen_range(2..=specs.len());

    let mut events = Vec::new();
    for (i, (label, event_type)) in specs.iter().take(event_count).enumerate() {
        let scheduled = hhmm(cursor);
        let slip: i32 = rng.gen_range(-2..12);
        let done = rng.gen_bool(0.7);
        let status = if done {
            if slip > 5 {
                EventStatus::OvertimeCompleted
            } else {
                EventStatus::Completed
            }
        } else {
            EventStatus::Pending
        };
        let actual = if done { hhmm(cursor + slip) } else { TIME_NONE.to_string() };

        events.push(event(
            &format!("f{}-e{}", ordinal, i + 1),
            label,
            *event_type,
            Some(scheduled.as_str()),
            &actual,
            status,
        ));
        cursor += rng.gen_range(10..25);
    }

    let release_start = hhmm(arrival_min + 10);
    let release_end = hhmm(arrival_min + 70);

    Flight {
        id: ordinal.to_string(),
        flight_no,
        codeshare: None,
        stand: Some(format!("{}", rng.gen_range(200..330))),
        gate: Some(format!("{:02}", rng.gen_range(1..40))),
        registration: Some(format!("B-{:04}", rng.gen_range(1000..9999))),
        aircraft_type: Some(AIRCRAFT_TYPES[rng.gen_range(0..AIRCRAFT_TYPES.len())].to_string()),
        aircraft_category: Some(if rng.gen_bool(0.2) { "H" } else { "M" }.to_string()),
        route: Some(format!("{} - {} - {}", origin, DEMO_AIRPORT, dest)),
        flight_type: if rng.gen_bool(0.1) { FlightType::Extra } else { FlightType::Regular },
        arr_info: Some(ArrivalInfo {
            status: ArrivalStatus::Arrived,
            stand: Some(format!("{}", rng.gen_range(200..330))),
        }),
        dep_info: None,
        times: FlightTimes {
            sta: Some(hhmm(arrival_min)),
            std: Some(hhmm(arrival_min + 80)),
            ..Default::default()
        },
        events,
        annotations: vec![window(&release_start, &release_end, "放行")],
        remarks: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate_demo_schedule(42, 10);
        let b = generate_demo_schedule(42, 10);

        assert_eq!(a.flights.len(), b.flights.len());
        for (fa, fb) in a.flights.iter().zip(&b.flights) {
            assert_eq!(fa.flight_no, fb.flight_no);
            assert_eq!(fa.events.len(), fb.events.len());
            for (ea, eb) in fa.events.iter().zip(&fb.events) {
                assert_eq!(ea.time_scheduled, eb.time_scheduled);
                assert_eq!(ea.time_actual, eb.time_actual);
            }
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_demo_schedule(1, 10);
        let b = generate_demo_schedule(2, 10);
        let nos_a: Vec<_> = a.flights.iter().map(|f| f.flight_no.clone()).collect();
        let nos_b: Vec<_> = b.flights.iter().map(|f| f.flight_no.clone()).collect();
        assert_ne!(nos_a, nos_b);
    }

    #[test]
    fn test_curated_flights_cover_statuses() {
        let data = generate_demo_schedule(42, 0);
        assert_eq!(data.metadata.day_start_hour, 8);
        assert!(data.flights.len() >= 6);

        let statuses: Vec<EventStatus> = data
            .flights
            .iter()
            .flat_map(|f| f.events.iter().map(|e| e.status))
            .collect();
        assert!(statuses.contains(&EventStatus::OvertimeCompleted));
        assert!(statuses.contains(&EventStatus::OvertimeIncomplete));
        assert!(statuses.contains(&EventStatus::Alert));
        assert!(statuses.contains(&EventStatus::Warning));
    }

    #[test]
    fn test_events_have_usable_anchors() {
        let data = generate_demo_schedule(7, 20);
        for flight in &data.flights {
            for event in &flight.events {
                assert!(event.anchor_time().is_some(), "event {} lacks a time", event.id);
            }
        }
    }

    #[test]
    fn test_annotations_are_renderable() {
        let data = generate_demo_schedule(42, 15);
        for flight in &data.flights {
            for anno in &flight.annotations {
                assert!(anno.start_time.is_some() && anno.end_time.is_some());
            }
        }
    }
}
