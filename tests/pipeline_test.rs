use chrono::NaiveDate;
use pool_report::adapters::{export, input};
use pool_report::{DiagnosticSink, PoolEngine};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

const CONFIG_JSON: &str = r#"{
  "CommissionRate": 0.15,
  "LeadsBonus": 25
}"#;

const TEAMS_JSON: &str = r#"{
  "Start": "2020-06-01",
  "End": "2020-06-14",
  "Resources": {
    "alice": {
      "landing": {
        "Start": "2020-06-01",
        "End": "2020-06-10",
        "Leads": {
          "2020-06-02": [120.0, 80.5],
          "2020-06-08": [200.0]
        }
      },
      "checkout": {
        "Start": "2020-06-11",
        "End": "2020-06-14",
        "Leads": {
          "2020-06-12": [95.0]
        }
      }
    },
    "bob": {
      "landing": {
        "Start": "2020-06-01",
        "End": "2020-06-05",
        "Leads": {
          "2020-06-03": [60.0],
          "2020-06-07": [45.0]
        }
      }
    },
    "carol": {
      "checkout": {
        "Start": "2020-06-05",
        "End": "2020-06-14",
        "Leads": {
          "2020-06-06": [150.0, 30.0],
          "2020-06-13": [75.0]
        }
      }
    }
  }
}"#;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[derive(Clone, Default)]
struct SharedSink {
    warnings: Arc<Mutex<Vec<(String, String, NaiveDate)>>>,
}

impl DiagnosticSink for SharedSink {
    fn out_of_window_lead(&mut self, resource: &str, team: &str, date: NaiveDate) {
        self.warnings
            .lock()
            .unwrap()
            .push((resource.to_string(), team.to_string(), date));
    }
}

fn write_inputs(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let config_path = dir.path().join("config.json");
    let teams_path = dir.path().join("teams.json");
    std::fs::write(&config_path, CONFIG_JSON).unwrap();
    std::fs::write(&teams_path, TEAMS_JSON).unwrap();
    (config_path, teams_path)
}

#[test]
fn test_end_to_end_pool_report() {
    let dir = TempDir::new().unwrap();
    let (config_path, teams_path) = write_inputs(&dir);

    let settings = input::load_config(&config_path).unwrap();
    assert_eq!(settings.commission_rate, Decimal::new(15, 2));
    assert_eq!(settings.leads_bonus, Decimal::from(25));

    let (period, ledger) = input::load_teams(&teams_path).unwrap();
    assert_eq!(ledger.team_names(), vec!["landing", "checkout"]);

    let sink = SharedSink::default();
    let report = PoolEngine::new(sink.clone()).run(&ledger, &period);

    // bob booked a lead two days after leaving the landing team.
    assert_eq!(
        *sink.warnings.lock().unwrap(),
        vec![("bob".to_string(), "landing".to_string(), date(2020, 6, 7))]
    );

    // Pools sorted by (team, first_day).
    let summary: Vec<(String, Vec<String>, NaiveDate, NaiveDate)> = report
        .pools
        .iter()
        .map(|p| {
            (
                p.team.clone(),
                p.member_resources.clone(),
                p.first_day,
                p.last_day,
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            (
                "checkout".to_string(),
                vec!["carol".to_string()],
                date(2020, 6, 5),
                date(2020, 6, 10)
            ),
            (
                "checkout".to_string(),
                vec!["alice".to_string(), "carol".to_string()],
                date(2020, 6, 11),
                date(2020, 6, 14)
            ),
            (
                "landing".to_string(),
                vec!["alice".to_string(), "bob".to_string()],
                date(2020, 6, 1),
                date(2020, 6, 5)
            ),
            (
                "landing".to_string(),
                vec!["alice".to_string()],
                date(2020, 6, 6),
                date(2020, 6, 10)
            ),
        ]
    );

    // Revenue per pool, including bob's out-of-window lead, which lands in
    // the landing pool covering its date.
    let totals: Vec<Decimal> = report.pools.iter().map(|p| p.total_revenue()).collect();
    assert_eq!(
        totals,
        vec![
            Decimal::from(180),
            Decimal::from(170),
            Decimal::new(2605, 1),
            Decimal::from(245),
        ]
    );

    // Conservation: everything here has a covering pool, so pooled revenue
    // equals flattened revenue.
    let flattened: Decimal = report.events.iter().map(|e| e.amount).sum();
    let pooled: Decimal = totals.iter().copied().sum();
    assert_eq!(report.events.len(), 9);
    assert_eq!(flattened, Decimal::new(8555, 1));
    assert_eq!(pooled, flattened);
}

#[test]
fn test_inverted_period_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let teams_path = dir.path().join("teams.json");
    std::fs::write(
        &teams_path,
        r#"{"Start": "2020-06-14", "End": "2020-06-01", "Resources": {}}"#,
    )
    .unwrap();

    assert!(input::load_teams(&teams_path).is_err());
}

#[test]
fn test_exported_csv_matches_flattened_events() {
    let dir = TempDir::new().unwrap();
    let (_, teams_path) = write_inputs(&dir);
    let (period, ledger) = input::load_teams(&teams_path).unwrap();

    let report = PoolEngine::new(SharedSink::default()).run(&ledger, &period);

    let csv_path = dir.path().join("events.csv");
    export::export_events_csv(&report.events, &csv_path).unwrap();

    let content = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1 + report.events.len());
    assert_eq!(lines[0], "date,team,resource,amount");

    let fields: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(&fields[..3], ["2020-06-02", "landing", "alice"]);
    assert_eq!(Decimal::from_str(fields[3]).unwrap(), Decimal::from(120));
}
