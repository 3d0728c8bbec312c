use anyhow::{anyhow, Result};
use clap::Parser;
use geometry::point::{Fixed2, Point};
use log::{debug, info};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Parser)]
#[command(about = "Construct, add and measure two points")]
pub struct Options {
    /// First point as `x,y`
    #[arg(long, default_value = "3,4", value_parser = parse_point, allow_hyphen_values = true)]
    p1: Point,

    /// Second point as `x,y`
    #[arg(long, default_value = "-1,2.5", value_parser = parse_point, allow_hyphen_values = true)]
    p2: Point,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    p1: Point,
    p2: Point,
    p1_distance: f64,
    sum: Point,
    sum_distance: f64,
}

impl Report {
    fn new(p1: Point, p2: Point) -> Self {
        let sum = p1 + p2;

        Report {
            p1,
            p2,
            p1_distance: p1.distance_to_origin(),
            sum,
            sum_distance: sum.distance_to_origin(),
        }
    }

    fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "Point p1: ")?;
        self.p1.write_to(out)?;

        write!(out, "Point p2: ")?;
        self.p2.write_to(out)?;

        writeln!(
            out,
            "Distance of p1 from origin: {}",
            Fixed2(self.p1_distance)
        )?;

        write!(out, "Sum of p1 and p2: ")?;
        self.sum.write_to(out)?;

        writeln!(
            out,
            "Distance of sumPoint from origin: {}",
            Fixed2(self.sum_distance)
        )
    }
}

fn parse_point(s: &str) -> Result<Point> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `x,y`, got `{}`", s))?;

    let x = x.trim().parse::<f64>()?;
    let y = y.trim().parse::<f64>()?;

    Ok(Point::new(x, y))
}

fn run<W: Write>(opt: &Options, out: &mut W) -> Result<()> {
    debug!("p1 = {:?}, p2 = {:?}", opt.p1, opt.p2);
    let report = Report::new(opt.p1, opt.p2);

    if opt.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        report.write_text(out)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let opt = Options::parse();

    info!("Compute report");
    let stdout = io::stdout();
    run(&opt, &mut stdout.lock())?;

    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;

    fn output(args: &[&str]) -> String {
        let opt = Options::try_parse_from(std::iter::once("geometry").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        run(&opt, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn default_run_matches_demo_output() {
        assert_eq!(
            output(&[]),
            "Point p1: Point(x: 3.00, y: 4.00)\n\
             Point p2: Point(x: -1.00, y: 2.50)\n\
             Distance of p1 from origin: 5.00\n\
             Sum of p1 and p2: Point(x: 2.00, y: 6.50)\n\
             Distance of sumPoint from origin: 6.80\n"
        );
    }

    #[test]
    fn custom_points() {
        assert_eq!(
            output(&["--p1", "1,1", "--p2", "-4, -5"]),
            "Point p1: Point(x: 1.00, y: 1.00)\n\
             Point p2: Point(x: -4.00, y: -5.00)\n\
             Distance of p1 from origin: 1.41\n\
             Sum of p1 and p2: Point(x: -3.00, y: -4.00)\n\
             Distance of sumPoint from origin: 5.00\n"
        );
    }

    #[test]
    fn non_finite_points_print_like_printf() {
        assert_eq!(
            output(&["--p1", "nan,0", "--p2", "inf,1"]),
            "Point p1: Point(x: nan, y: 0.00)\n\
             Point p2: Point(x: inf, y: 1.00)\n\
             Distance of p1 from origin: nan\n\
             Sum of p1 and p2: Point(x: nan, y: 1.00)\n\
             Distance of sumPoint from origin: nan\n"
        );
    }

    #[test]
    fn json_report() {
        let value: serde_json::Value = serde_json::from_str(&output(&["--json"])).unwrap();

        assert_eq!(value["p1"], serde_json::json!({ "x": 3.0, "y": 4.0 }));
        assert_eq!(value["p2"], serde_json::json!({ "x": -1.0, "y": 2.5 }));
        assert_eq!(value["p1_distance"], 5.0);
        assert_eq!(value["sum"], serde_json::json!({ "x": 2.0, "y": 6.5 }));

        let sum_distance = value["sum_distance"].as_f64().unwrap();
        assert!((sum_distance - 6.800735).abs() < 1e-6);
    }

    #[test]
    fn parse_point_accepts_whitespace() {
        assert_eq!(parse_point(" 2.5 , -1 ").unwrap(), Point::new(2.5, -1.0));
        assert_eq!(parse_point("0,0").unwrap(), Point::ORIGIN);
    }

    #[test]
    fn parse_point_rejects_malformed_input() {
        assert!(parse_point("1").is_err());
        assert!(parse_point("1;2").is_err());
        assert!(parse_point("a,2").is_err());
        assert!(Options::try_parse_from(["geometry", "--p1", "3"]).is_err());
    }
}
