#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::io::{self, Write};
use std::process::ExitCode;

use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use rand::RngCore;
use rand::SeedableRng;
use torus_life::Renderer;
use torus_life::torus::{self, Cell, Grid, patterns};

const DEFAULT_WIDTH: i32 = 20;
const DEFAULT_HEIGHT: i32 = 10;
const DEFAULT_ORIGIN: (i32, i32) = (2, 2);
const DEFAULT_DENSITY: f64 = 0.3;
const DEFAULT_RNG_SEED: u64 = 0x5EED_AB1E;
const DEFAULT_QUIT_KEY: char = 'q';

const USAGE: &str = "usage: torus-life [--width N] [--height N] [--pattern NAME] \
                     [--random] [--density F] [--seed N] [--quit-key C]";

// Exit statuses, one per failure kind: 2 usage, 1 bad grid dimensions,
// 74 (EX_IOERR) terminal I/O.
const EXIT_BAD_DIMENSIONS: u8 = 1;
const EXIT_USAGE: u8 = 2;
const EXIT_IO: u8 = 74;

enum SeedKind {
    Pattern(&'static patterns::Pattern),
    Random { density: f64, seed: u64 },
}

struct RunConfig {
    width: i32,
    height: i32,
    seed: SeedKind,
    quit_key: char,
}

fn parse_args() -> Result<RunConfig, String> {
    let args: Vec<String> = std::env::args().collect();
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut pattern = &patterns::GLIDER;
    let mut random = false;
    let mut density = DEFAULT_DENSITY;
    let mut rng_seed = DEFAULT_RNG_SEED;
    let mut quit_key = DEFAULT_QUIT_KEY;

    let next_arg = |i: usize, flag: &str| -> Result<&str, String> {
        args.get(i)
            .map(String::as_str)
            .ok_or_else(|| format!("{flag} requires a value"))
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                i += 1;
                width = next_arg(i, "--width")?
                    .parse()
                    .map_err(|_| "--width requires an integer".to_string())?;
            }
            "--height" => {
                i += 1;
                height = next_arg(i, "--height")?
                    .parse()
                    .map_err(|_| "--height requires an integer".to_string())?;
            }
            "--pattern" => {
                i += 1;
                let name = next_arg(i, "--pattern")?;
                pattern = patterns::find(name)
                    .ok_or_else(|| format!("unknown pattern: {name}"))?;
            }
            "--random" => {
                random = true;
            }
            "--density" => {
                i += 1;
                density = next_arg(i, "--density")?
                    .parse()
                    .map_err(|_| "--density requires a number in [0, 1]".to_string())?;
                if !(0.0..=1.0).contains(&density) {
                    return Err("--density requires a number in [0, 1]".to_string());
                }
            }
            "--seed" => {
                i += 1;
                rng_seed = next_arg(i, "--seed")?
                    .parse()
                    .map_err(|_| "--seed requires an unsigned integer".to_string())?;
            }
            "--quit-key" => {
                i += 1;
                let value = next_arg(i, "--quit-key")?;
                let mut chars = value.chars();
                quit_key = match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => return Err("--quit-key requires a single character".to_string()),
                };
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    let seed = if random {
        SeedKind::Random {
            density,
            seed: rng_seed,
        }
    } else {
        SeedKind::Pattern(pattern)
    };

    Ok(RunConfig {
        width,
        height,
        seed,
        quit_key,
    })
}

fn seed_grid(grid: &mut Grid, seed: &SeedKind) {
    match seed {
        SeedKind::Pattern(pattern) => {
            patterns::stamp(grid, pattern, DEFAULT_ORIGIN.0, DEFAULT_ORIGIN.1);
        }
        SeedKind::Random { density, seed } => seed_random(grid, *density, *seed),
    }
}

fn seed_random(grid: &mut Grid, density: f64, seed: u64) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let threshold = (u64::MAX as f64 * density) as u64;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if rng.next_u64() <= threshold {
                grid.set(x, y, Cell::Alive);
            }
        }
    }
}

fn run_loop(grid: &mut Grid, quit_key: char) -> io::Result<()> {
    let renderer = Renderer::default();
    let mut stdout = io::stdout();

    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    let result = drive(&mut stdout, grid, &renderer, quit_key);
    execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result
}

fn drive(
    stdout: &mut io::Stdout,
    grid: &mut Grid,
    renderer: &Renderer,
    quit_key: char,
) -> io::Result<()> {
    let mut generation: u64 = 0;
    loop {
        queue!(stdout, cursor::MoveTo(0, 0), Clear(ClearType::All))?;
        for line in renderer.render(grid).lines() {
            queue!(stdout, Print(line), Print("\r\n"))?;
        }
        queue!(
            stdout,
            Print(format!(
                "Generation: {generation}  (population {})\r\n",
                grid.population()
            )),
            Print(format!("any key advances, {quit_key} quits\r\n")),
        )?;
        stdout.flush()?;

        if read_quit_signal(quit_key)? {
            return Ok(());
        }
        torus::step(grid);
        generation += 1;
    }
}

// Blocks until one key press; true means the quit signal arrived.
fn read_quit_signal(quit_key: char) -> io::Result<bool> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let quit = match key.code {
                KeyCode::Char(c) => {
                    c.eq_ignore_ascii_case(&quit_key)
                        || (c == 'c' && key.modifiers.contains(KeyModifiers::CONTROL))
                }
                KeyCode::Esc => true,
                _ => false,
            };
            return Ok(quit);
        }
    }
}

fn main() -> ExitCode {
    let config = match parse_args() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let mut grid = match Grid::new(config.width, config.height) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(EXIT_BAD_DIMENSIONS);
        }
    };
    seed_grid(&mut grid, &config.seed);

    match run_loop(&mut grid, config.quit_key) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("terminal error: {err}");
            ExitCode::from(EXIT_IO)
        }
    }
}
