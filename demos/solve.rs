//! Terminal demo: carve a random maze, watch the stepped search solve it.
//!
//! The driver loop is the whole integration story: generate a layout, hand
//! it to a session, call `step()` until the status is terminal, and render
//! from the read-only cell snapshots.

use mazer_core::{Direction, Point, WallEdge};
use mazer_gen::MazeGen;
use mazer_search::{Heuristic, Session, Status, UNREACHABLE};

const WIDTH: i32 = 15;
const HEIGHT: i32 = 10;

fn main() {
    let mut generator = MazeGen::new(WIDTH, HEIGHT, rand::rng());
    generator.perfect();

    let mut session = Session::new(WIDTH, HEIGHT);
    session.set_walls(generator.into_maze());
    session.set_heuristic(Heuristic::Euclidean, 1.0);

    println!("maze ({WIDTH}x{HEIGHT}):\n{}", render(&session));

    session.start_run();
    let mut steps = 0u32;
    let status = loop {
        match session.step().expect("parent graph stays intact") {
            Status::Running => {
                steps += 1;
                if steps % 25 == 0 {
                    println!("after {steps} steps:\n{}", render(&session));
                }
            }
            terminal => break terminal,
        }
    };

    println!("finished ({status:?}) after {steps} steps:\n{}", render(&session));
    match status {
        Status::Done => println!(
            "path length {} with {} cells finalized",
            session.path().len() - 1,
            session.visited_count()
        ),
        _ => println!("the exit is walled off"),
    }
}

/// Draw the maze as a (2w+1) × (2h+1) character block: `#` for walls and
/// borders, and per-cell markers for the search state.
fn render(session: &Session) -> String {
    let maze = session.maze();
    let (w, h) = (maze.width(), maze.height());
    let cols = (2 * w + 1) as usize;
    let mut rows = vec![vec![' '; cols]; (2 * h + 1) as usize];

    for (y, row) in rows.iter_mut().enumerate() {
        for (x, ch) in row.iter_mut().enumerate() {
            if y % 2 == 0 && x % 2 == 0 {
                *ch = '#'; // lattice corner
            } else if y == 0 || y == (2 * h) as usize || x == 0 || x == (2 * w) as usize {
                *ch = '#'; // outer border
            }
        }
    }

    for p in maze.cells() {
        let (cx, cy) = ((2 * p.x + 1) as usize, (2 * p.y + 1) as usize);
        rows[cy][cx] = cell_marker(session, p);
        if maze.wall(WallEdge::between(p, Direction::Right)) {
            rows[cy][cx + 1] = '#';
        }
        if maze.wall(WallEdge::between(p, Direction::Down)) {
            rows[cy + 1][cx] = '#';
        }
    }

    rows.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .fold(String::new(), |mut out, line| {
            out.push_str(&line);
            out.push('\n');
            out
        })
}

fn cell_marker(session: &Session, p: Point) -> char {
    let view = session.cell_state(p.x, p.y).expect("in-bounds cell");
    if view.on_path {
        '*'
    } else if view.current {
        '@'
    } else if view.visited {
        'o'
    } else if view.g != UNREACHABLE {
        '.'
    } else {
        ' '
    }
}
