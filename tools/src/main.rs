//! capacity-runner: headless front end for the ELITE capacity model.
//!
//! Usage:
//!   capacity-runner --members 360 --scenario standard --centers 3
//!   capacity-runner --members 240 --json --data-dir ./data
//!   capacity-runner --ipc-mode

use anyhow::Result;
use elite_capacity_core::{
    config::ModelConfig,
    format::{format_dollars, format_percent, proportional_bar},
    metrics::DerivedMetrics,
    multi_center::CenterCount,
    scenario::CapacityScenario,
    session::{CalculatorSession, InteractiveState, StateCommand, DEFAULT_MEMBERS},
};
use std::env;
use std::io::{self, BufRead, Write};

const BAR_WIDTH: usize = 30;

/// One IPC line: a runner control message or a model state change.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum IpcCommand {
    Control(ControlCommand),
    State(StateCommand),
}

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ControlCommand {
    GetState,
    Quit,
}

#[derive(serde::Serialize)]
struct Report<'a> {
    generated_at: chrono::DateTime<chrono::Utc>,
    state: &'a InteractiveState,
    metrics: &'a DerivedMetrics,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    run(&args)
}

fn run(args: &[String]) -> Result<()> {
    if args.iter().any(|a| a == "--list-scenarios") {
        print_scenarios();
        return Ok(());
    }

    let members = parse_arg(args, "--members", DEFAULT_MEMBERS as i64);
    let centers = CenterCount::try_from(parse_arg(args, "--centers", 1u32))?;
    let scenario = match find_arg(args, "--scenario") {
        Some(key) => key.parse::<CapacityScenario>()?,
        None => CapacityScenario::Standard,
    };
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let json = args.iter().any(|a| a == "--json");

    let config = match find_arg(args, "--data-dir") {
        Some(dir) => ModelConfig::load(dir)?,
        None => ModelConfig::standard(),
    };

    let state = InteractiveState::new(members, scenario, centers);
    let mut session = CalculatorSession::with_state(config, state);

    if ipc_mode {
        run_ipc_loop(&mut session)?;
    } else if json {
        let metrics = session.metrics();
        let report = Report {
            generated_at: chrono::Utc::now(),
            state: session.state(),
            metrics: &metrics,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&session.metrics());
    }

    Ok(())
}

fn run_ipc_loop(session: &mut CalculatorSession) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("ipc: rejected line: {e}");
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        let metrics = match cmd {
            IpcCommand::Control(ControlCommand::Quit) => break,
            IpcCommand::Control(ControlCommand::GetState) => session.metrics(),
            IpcCommand::State(command) => session.apply(command),
        };
        writeln!(stdout, "{}", serde_json::to_string(&metrics)?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn print_scenarios() {
    println!("=== CAPACITY SCENARIOS ===");
    for sc in CapacityScenario::ALL {
        println!(
            "  {:<10} {:>5} members/yr  {}",
            sc.key(),
            sc.annual_capacity(),
            sc.operating_hours()
        );
    }
}

fn print_summary(m: &DerivedMetrics) {
    let s = &m.staffing;
    let b = &m.break_even;
    let mc = &m.multi_center;

    println!("=== CAPACITY ===");
    println!("  scenario:       {} ({})", m.scenario, m.scenario.operating_hours());
    println!("  members:        {} of {}", m.member_count, m.annual_capacity);
    println!(
        "  utilization:    {} {}",
        proportional_bar(m.display_utilization_percent, 100.0, BAR_WIDTH),
        format_percent(m.utilization_percent)
    );

    println!();
    println!("=== STAFFING ===");
    println!("  teams needed:   {}", s.teams_needed);
    println!("  staff needed:   {}", s.staff_needed);
    println!("  staff cost:     {}", format_dollars(s.total_staff_cost));
    println!("  spare slots:    {}", s.spare_capacity);

    println!();
    println!("=== BREAK-EVEN ===");
    println!("  revenue/member: {}", format_dollars(b.revenue_per_member));
    println!("  team cost:      {}", format_dollars(b.team_cost));
    println!("  break-even at:  {} members", b.break_even_members);
    println!("  revenue:        {}", format_dollars(b.current_revenue));
    println!(
        "  profit:         {} ({})",
        format_dollars(b.profit_margin),
        format_percent(b.margin_percent())
    );
    println!("  margin/member:  {}", format_dollars(b.margin_per_member.round() as i64));

    println!();
    println!("=== {} CENTER(S) ===", mc.center_count);
    println!(
        "  executives:     {} (phase 1: {}, phase 2: {})",
        mc.phase1_execs + mc.phase2_execs,
        mc.phase1_execs,
        mc.phase2_execs
    );
    println!("  corporate:      {}", mc.corporate_staff);
    println!("  center ops:     {}", mc.total_center_ops);
    println!("  ELITE staff:    {} ({} teams)", mc.total_elite_staff, mc.elite_teams);
    println!("  headcount:      {}", mc.total_headcount);

    let total = mc.total_multi_center_cost as f64;
    for (label, cost) in [
        ("executive", mc.costs.executive),
        ("corporate", mc.costs.corporate),
        ("center ops", mc.costs.center_ops),
        ("ELITE teams", mc.costs.elite_teams),
    ] {
        println!(
            "  {:<14}{} {}",
            format!("{label}:"),
            proportional_bar(cost as f64, total, BAR_WIDTH),
            format_dollars(cost)
        );
    }
    println!("  total cost:     {}", format_dollars(mc.total_multi_center_cost));
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy + std::fmt::Display>(
    args: &[String],
    flag: &str,
    default: T,
) -> T {
    match find_arg(args, flag) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("args: could not parse {flag} value '{raw}', using {default}");
            default
        }),
    }
}
