#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use clap::{Arg, ArgAction, Command};
use std::io::BufReader;
use tsp_cli::extensions::solve::config::*;
use tsp_cli::extensions::solve::formats::{read_matrix, write_matrix_solution};
use tsp_core::prelude::{CostMatrix, InfoLogger, Solution, Solver};
use tsp_geo::common::DistanceUnit;
use tsp_geo::format::{RouteReport, write_route_geojson, write_route_json};
use tsp_geo::geocoding::{Gazetteer, resolve_places};

const FORMAT_ARG_NAME: &str = "FORMAT";
const INPUT_ARG_NAME: &str = "INPUT";
const GAZETTEER_ARG_NAME: &str = "gazetteer";
const UNIT_ARG_NAME: &str = "unit";
const NO_ROUNDING_ARG_NAME: &str = "no-rounding";
const MAX_VERTICES_ARG_NAME: &str = "max-vertices";
const PARALLEL_ARG_NAME: &str = "parallel";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const GEO_JSON_ARG_NAME: &str = "geo-json";
const LOG_ARG_NAME: &str = "log";

const MIN_PLACES: usize = 2;

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Finds the shortest closed tour which visits every place exactly once")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies the problem type")
                .required(true)
                .value_parser(["cities", "matrix"])
                .index(1),
        )
        .arg(
            Arg::new(INPUT_ARG_NAME)
                .help("Sets place names for cities format or the matrix file for matrix format")
                .required(true)
                .num_args(1..)
                .index(2),
        )
        .arg(
            Arg::new(GAZETTEER_ARG_NAME)
                .help("Specifies path to csv file with NAME,LAT,LNG columns used to locate places")
                .short('z')
                .long(GAZETTEER_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(UNIT_ARG_NAME)
                .help("Specifies distance unit: meters, kilometers or miles")
                .short('u')
                .long(UNIT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(NO_ROUNDING_ARG_NAME)
                .help("Specifies whether distances are kept as they are instead of rounding to whole units")
                .long(NO_ROUNDING_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(MAX_VERTICES_ARG_NAME)
                .help("Specifies max amount of places the solver accepts")
                .short('n')
                .long(MAX_VERTICES_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(PARALLEL_ARG_NAME)
                .help("Specifies whether subset tables are filled in parallel, optionally with amount of threads")
                .short('p')
                .long(PARALLEL_ARG_NAME)
                .num_args(0..=1)
                .default_missing_value("0")
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to solver configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GEO_JSON_ARG_NAME)
                .help("Specifies path to route output in geo json format")
                .short('g')
                .long(GEO_JSON_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
}

/// Runs solver commands.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let problem_format = matches.get_one::<String>(FORMAT_ARG_NAME).map(String::as_str).unwrap_or_default();
    let inputs: Vec<String> =
        matches.get_many::<String>(INPUT_ARG_NAME).map(|values| values.cloned().collect()).unwrap_or_default();

    let config = get_config(matches)?;
    let logger = if matches.get_flag(LOG_ARG_NAME) || config.is_logging_enabled() {
        Some(create_default_logger())
    } else {
        None
    };
    let solver = Solver::new(create_solver_config(&config, logger.clone())?);

    let create_out_file = |arg_name: &str, description: &str| {
        matches.get_one::<String>(arg_name).map(|path| create_file(path, description)).transpose()
    };

    match problem_format {
        "cities" => {
            let gazetteer_path = matches
                .get_one::<String>(GAZETTEER_ARG_NAME)
                .ok_or_else(|| "cities format requires gazetteer file, use --gazetteer".to_string())?;

            let route = solve_cities(&inputs, gazetteer_path, &config, &solver, logger)?;

            if let Some(out_geojson) = create_out_file(GEO_JSON_ARG_NAME, "out geojson")? {
                write_route_geojson(out_writer_func(Some(out_geojson)), &route).map_err(|err| err.to_string())?;
            }

            let out_result = create_out_file(OUT_RESULT_ARG_NAME, "out result")?;
            write_route_json(out_writer_func(out_result), &route).map_err(|err| err.to_string())
        }
        "matrix" => {
            if matches.contains_id(GEO_JSON_ARG_NAME) {
                return Err("geo json output requires 'cities' format".to_string());
            }

            let solution = solve_matrix(&inputs, &solver)?;

            let out_result = create_out_file(OUT_RESULT_ARG_NAME, "out result")?;
            write_matrix_solution(out_writer_func(out_result), &solution).map_err(|err| err.to_string())
        }
        _ => Err(format!("unknown format: '{problem_format}'")),
    }
}

/// Reads config file if it is specified and applies command line options on top of it.
fn get_config(matches: &ArgMatches) -> Result<Config, String> {
    let mut config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();

    let max_vertices = parse_int_value::<usize>(matches, MAX_VERTICES_ARG_NAME, "max vertices")?;
    let threads = parse_int_value::<usize>(matches, PARALLEL_ARG_NAME, "parallel threads")?;

    if max_vertices.is_some() || threads.is_some() {
        let solver = config.solver.get_or_insert(SolverSection { max_vertices: None, parallelism: None });

        if let Some(max_vertices) = max_vertices {
            solver.max_vertices = Some(check_max_vertices(max_vertices)?);
        }

        if let Some(threads) = threads {
            solver.parallelism = Some(ParallelismType::Layered { threads: Some(threads) });
        }
    }

    let unit = matches
        .get_one::<String>(UNIT_ARG_NAME)
        .map(|unit| unit.parse::<DistanceUnit>())
        .transpose()
        .map_err(|err| err.to_string())?;
    let is_rounding_disabled = matches.get_flag(NO_ROUNDING_ARG_NAME);

    if unit.is_some() || is_rounding_disabled {
        let distance = config.distance.get_or_insert(DistanceSection { unit: None, rounding: None });

        if unit.is_some() {
            distance.unit = unit;
        }

        if is_rounding_disabled {
            distance.rounding = Some(false);
        }
    }

    Ok(config)
}

fn solve_cities(
    names: &[String],
    gazetteer_path: &str,
    config: &Config,
    solver: &Solver,
    logger: Option<InfoLogger>,
) -> Result<RouteReport, String> {
    if names.len() < MIN_PLACES {
        return Err(format!("cities format expects at least {MIN_PLACES} places, got {}", names.len()));
    }

    let gazetteer = open_file(gazetteer_path, "gazetteer").and_then(|file| {
        Gazetteer::read_csv(BufReader::new(file)).map_err(|err| format!("cannot read gazetteer: '{err}'"))
    })?;

    if gazetteer.is_empty() {
        return Err(format!("gazetteer has no places: '{gazetteer_path}'"));
    }

    if let Some(logger) = logger.as_ref() {
        (logger)(format!("gazetteer contains {} places", gazetteer.len()).as_str());
    }

    let places = resolve_places(&gazetteer, names).map_err(|err| err.to_string())?;
    let builder = create_matrix_builder(config, logger.clone());
    let matrix = builder.build(&places).map_err(|err| format!("cannot create matrix: '{err}'"))?;

    let solution = solve_with(solver, &matrix)?;
    let route = RouteReport::new(&places, &solution, &matrix, builder.unit()).map_err(|err| err.to_string())?;

    if let Some(logger) = logger {
        let stops = route.stop_names().join(" -> ");
        (logger)(format!("route: {stops}, total distance: {} {}", route.total_distance, route.unit).as_str());
    }

    Ok(route)
}

fn solve_matrix(inputs: &[String], solver: &Solver) -> Result<Solution, String> {
    let path = match inputs {
        [path] => path,
        _ => return Err(format!("matrix format expects one matrix file, got {}", inputs.len())),
    };

    let matrix = open_file(path, "matrix")
        .and_then(|file| read_matrix(BufReader::new(file)).map_err(|err| format!("cannot read matrix: '{err}'")))?;

    solve_with(solver, &matrix)
}

fn solve_with(solver: &Solver, matrix: &CostMatrix) -> Result<Solution, String> {
    solver.solve(matrix).map_err(|err| format!("cannot find solution: '{err}'"))
}
