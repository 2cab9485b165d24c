pub const USAGE: &str = "\
logstats-chart - draw scraper log statistics as a line chart

USAGE:
    logstats-chart <command>

COMMANDS:
    fetch [n]    Fetch n records from /logstats_data and render them (default: LOGSTATS_RECORDS)
    random       Render 100 random demo points
    serve        Serve /logstats_data on LOGSTATS_BIND
    help         Show this message

ENVIRONMENT:
    LOGSTATS_BASE_URL, LOGSTATS_RECORDS, LOGSTATS_TIMEOUT_SECS, LOGSTATS_BIND,
    CHART_DIR, CHART_ID, CHART_WIDTH, CHART_HEIGHT";

pub fn execute() -> Result<(), String> {
    println!("{}", USAGE);
    Ok(())
}
