use crate::problems::ProblemError;
use crate::search::{Action, Heuristic, HeuristicValue, Problem};
use itertools::Itertools;
use serde::Deserialize;
use std::fmt::{self, Display};
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

/// A sliding puzzle, e.g.
///
/// ```toml
/// kind = "sliding-puzzle"
/// tiles = [[4, 1, 3], [7, 2, 6], [0, 5, 8]]
/// ```
///
/// `0` is the blank. Without `goal` the tiles are expected in increasing
/// order with the blank last.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PuzzleDefinition {
    pub tiles: Vec<Vec<u8>>,
    #[serde(default)]
    pub goal: Option<Vec<Vec<u8>>>,
}

/// A square board, tiles are stored row by row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    tiles: Vec<u8>,
}

impl Board {
    fn from_rows(rows: &[Vec<u8>]) -> Result<Self, ProblemError> {
        let width = rows.len();
        if width == 0 || width > 16 {
            return Err(ProblemError::InvalidPuzzle(format!(
                "the board must have between 1 and 16 rows, got {}",
                width
            )));
        }
        if let Some(row) = rows.iter().find(|row| row.len() != width) {
            return Err(ProblemError::InvalidPuzzle(format!(
                "the board is not square, found a row of length {} in a board of {} rows",
                row.len(),
                width
            )));
        }
        let tiles = rows.concat();
        let expected = (0..tiles.len()).collect_vec();
        let sorted = tiles
            .iter()
            .map(|&tile| tile as usize)
            .sorted()
            .collect_vec();
        if sorted != expected {
            return Err(ProblemError::InvalidPuzzle(format!(
                "the tiles must be the numbers 0 to {} exactly once",
                tiles.len() - 1
            )));
        }
        Ok(Self { width, tiles })
    }

    fn ordered(width: usize) -> Self {
        let size = width * width;
        let tiles = (1..size)
            .map(|tile| tile as u8)
            .chain(std::iter::once(0))
            .collect();
        Self { width, tiles }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn tile(&self, row: usize, column: usize) -> u8 {
        self.tiles[row * self.width + column]
    }

    fn blank(&self) -> usize {
        self.tiles
            .iter()
            .position(|&tile| tile == 0)
            .expect("Board without a blank")
    }

    /// The position the blank moves to, if the move stays on the board.
    fn target(&self, slide: SlideMove) -> Option<usize> {
        let blank = self.blank();
        let (row, column) = (blank / self.width, blank % self.width);
        match slide {
            SlideMove::Up if row > 0 => Some(blank - self.width),
            SlideMove::Down if row + 1 < self.width => Some(blank + self.width),
            SlideMove::Left if column > 0 => Some(blank - 1),
            SlideMove::Right if column + 1 < self.width => Some(blank + 1),
            _ => None,
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .tiles
            .chunks(self.width)
            .map(|row| row.iter().join(" "))
            .join("\n");
        write!(f, "{}", rows)
    }
}

/// The direction the blank moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SlideMove {
    Up,
    Down,
    Left,
    Right,
}

impl Action<Board> for SlideMove {
    fn name(&self) -> &str {
        self.as_ref()
    }

    fn apply(&self, state: &Board) -> Board {
        let mut board = state.clone();
        if let Some(target) = state.target(*self) {
            board.tiles.swap(state.blank(), target);
        }
        board
    }

    fn cost_to_apply(&self, _state: &Board) -> f64 {
        1.
    }
}

/// Sum over the tiles of their grid distance to their goal position.
#[derive(Debug, Clone)]
pub struct ManhattanDistance {
    width: usize,
    /// Goal position of each tile, indexed by tile
    goal_positions: Vec<usize>,
}

impl ManhattanDistance {
    pub fn new(goal: &Board) -> Self {
        let mut goal_positions = vec![0; goal.tiles.len()];
        for (position, &tile) in goal.tiles.iter().enumerate() {
            goal_positions[tile as usize] = position;
        }
        Self {
            width: goal.width,
            goal_positions,
        }
    }

    fn distance(&self, from: usize, to: usize) -> usize {
        (from / self.width).abs_diff(to / self.width)
            + (from % self.width).abs_diff(to % self.width)
    }
}

impl Heuristic<Board> for ManhattanDistance {
    fn evaluate(&self, state: &Board) -> HeuristicValue {
        let total: usize = state
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(position, &tile)| {
                self.distance(position, self.goal_positions[tile as usize])
            })
            .sum();
        (total as f64).into()
    }
}

#[derive(Debug, Clone)]
pub struct SlidingPuzzle {
    initial: Board,
    goal: Board,
}

impl SlidingPuzzle {
    pub fn new(definition: PuzzleDefinition) -> Result<Self, ProblemError> {
        let initial = Board::from_rows(&definition.tiles)?;
        let goal = match &definition.goal {
            Some(rows) => Board::from_rows(rows)?,
            None => Board::ordered(initial.width),
        };
        if goal.width != initial.width {
            return Err(ProblemError::InvalidPuzzle(format!(
                "the goal is {0}x{0} but the board is {1}x{1}",
                goal.width, initial.width
            )));
        }
        Ok(Self { initial, goal })
    }

    pub fn from_text(text: &str) -> Result<Self, ProblemError> {
        Self::new(toml::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ProblemError> {
        Self::from_text(&std::fs::read_to_string(path)?)
    }

    pub fn manhattan_distance(&self) -> ManhattanDistance {
        ManhattanDistance::new(&self.goal)
    }

    /// Half of all boards cannot reach the goal. A board can when the parity
    /// of the permutation taking it to the goal equals the parity of the
    /// distance the blank has to travel.
    pub fn is_solvable(&self) -> bool {
        let heuristic = self.manhattan_distance();
        let permutation = self
            .initial
            .tiles
            .iter()
            .map(|&tile| heuristic.goal_positions[tile as usize])
            .collect_vec();

        let mut visited = vec![false; permutation.len()];
        let mut cycles = 0;
        for start in 0..permutation.len() {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut position = start;
            while !visited[position] {
                visited[position] = true;
                position = permutation[position];
            }
        }
        let permutation_parity = (permutation.len() - cycles) % 2;

        let blank = self.initial.blank();
        let blank_distance = heuristic.distance(blank, heuristic.goal_positions[0]);
        permutation_parity == blank_distance % 2
    }
}

impl Problem for SlidingPuzzle {
    type State = Board;
    type Action = SlideMove;

    fn initial_state(&self) -> Board {
        self.initial.clone()
    }

    fn applicable_actions(&self, state: &Board) -> Vec<SlideMove> {
        SlideMove::iter()
            .filter(|&slide| state.target(slide).is_some())
            .collect()
    }

    fn is_goal(&self, state: &Board) -> bool {
        *state == self.goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_engines::{
        AStarSearch, BreadthFirstSearch, SearchEngine, UniformCostSearch,
    };
    use crate::search::validate;

    fn puzzle(tiles: Vec<Vec<u8>>) -> SlidingPuzzle {
        SlidingPuzzle::new(PuzzleDefinition { tiles, goal: None }).unwrap()
    }

    fn scrambled() -> SlidingPuzzle {
        puzzle(vec![vec![4, 1, 3], vec![7, 2, 6], vec![0, 5, 8]])
    }

    #[test]
    fn corner_blank_has_two_moves() {
        let problem = scrambled();
        let actions = problem.applicable_actions(&problem.initial_state());
        assert_eq!(actions, [SlideMove::Up, SlideMove::Right]);
        assert_eq!(actions[0].name(), "up");
    }

    #[test]
    fn sliding_swaps_the_blank() {
        let problem = scrambled();
        let board = SlideMove::Up.apply(&problem.initial_state());
        assert_eq!(board.to_string(), "4 1 3\n0 2 6\n7 5 8");
        assert_eq!(board.tile(1, 0), 0);
    }

    #[test]
    fn manhattan_distance_of_scrambled_board() {
        let problem = scrambled();
        let heuristic = problem.manhattan_distance();
        let initial = problem.initial_state();
        assert_eq!(heuristic.evaluate(&initial).into_inner(), 6.);
        assert_eq!(heuristic.evaluate(&problem.goal).into_inner(), 0.);
    }

    #[test]
    fn astar_and_breadth_first_agree_on_length() {
        let problem = scrambled();
        let mut astar = AStarSearch::new(problem.manhattan_distance(), false);
        let (result, astar_statistics) = astar.search(&problem);
        let plan = result.into_plan().expect("plan should be found");
        assert_eq!(plan.len(), 6);
        assert_eq!(validate(&plan, &problem), Ok(()));

        let (result, breadth_first_statistics) = BreadthFirstSearch::new(false).search(&problem);
        assert_eq!(result.into_plan().map(|plan| plan.len()), Some(6));
        assert!(
            astar_statistics.get_expanded_nodes() < breadth_first_statistics.get_expanded_nodes()
        );
    }

    #[test]
    fn uniform_cost_counts_moves() {
        let problem = puzzle(vec![vec![1, 2, 3], vec![4, 5, 6], vec![0, 7, 8]]);
        let (result, _) = UniformCostSearch::new(false).search(&problem);
        let plan = result.into_plan().expect("plan should be found");
        assert_eq!(plan.steps(), ["right", "right"]);
    }

    #[test]
    fn solvability() {
        assert!(scrambled().is_solvable());
        assert!(puzzle(vec![vec![1, 2], vec![3, 0]]).is_solvable());
        let unsolvable = puzzle(vec![vec![1, 2, 3], vec![4, 5, 6], vec![8, 7, 0]]);
        assert!(!unsolvable.is_solvable());
        assert!(!puzzle(vec![vec![2, 1], vec![3, 0]]).is_solvable());
    }

    #[test]
    fn invalid_boards_are_rejected() {
        let not_square = SlidingPuzzle::new(PuzzleDefinition {
            tiles: vec![vec![1, 2, 0], vec![3, 4, 5]],
            goal: None,
        });
        assert!(matches!(not_square, Err(ProblemError::InvalidPuzzle(_))));

        let repeated_tile = SlidingPuzzle::new(PuzzleDefinition {
            tiles: vec![vec![1, 1], vec![2, 0]],
            goal: None,
        });
        assert!(matches!(repeated_tile, Err(ProblemError::InvalidPuzzle(_))));

        let wrong_goal = SlidingPuzzle::new(PuzzleDefinition {
            tiles: vec![vec![1, 2], vec![3, 0]],
            goal: Some(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 0]]),
        });
        assert!(matches!(wrong_goal, Err(ProblemError::InvalidPuzzle(_))));
    }

    #[test]
    fn custom_goal() {
        let problem = SlidingPuzzle::from_text(
            r#"
            tiles = [[1, 2], [0, 3]]
            goal = [[0, 2], [1, 3]]
            "#,
        )
        .unwrap();
        let (result, _) = BreadthFirstSearch::new(false).search(&problem);
        let plan = result.into_plan().expect("plan should be found");
        assert_eq!(plan.steps(), ["up"]);
    }
}
