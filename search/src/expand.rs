//! One substitution step: 2×2 pattern → 4×4 block.

use crate::grid::{Block, Pattern, BLOCK_SIDE, PATTERN_SIDE};
use crate::rules::RuleTable;

/// Replace every cell of `pattern` by its full rule image.
///
/// Cell `(y, x)` of the result is `rule[pattern[y / 2][x / 2]][y % 2][x % 2]`,
/// so each quadrant of the block is exactly the image of the corresponding
/// cell.
///
/// # Example
///
/// ```
/// use fws_search::{expand, Params, Pattern, RuleTable};
///
/// let table = RuleTable::build(&Params::DEFAULT);
/// let block = expand(&table, table.start());
/// assert_eq!(block.quadrant(0, 0), Pattern::ZERO);
/// assert_eq!(block.quadrant(0, 1), table.rule(1));
/// assert_eq!(block.quadrant(1, 1), table.rule(2));
/// ```
pub fn expand(table: &RuleTable, pattern: Pattern) -> Block {
    let mut rows = [[0; BLOCK_SIDE]; BLOCK_SIDE];
    for (y, row) in rows.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            let image = table.rule(pattern.get(y / PATTERN_SIDE, x / PATTERN_SIDE));
            *cell = image.get(y % PATTERN_SIDE, x % PATTERN_SIDE);
        }
    }
    Block::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Params;

    #[test]
    fn start_expands_to_known_block() {
        let table = RuleTable::build(&Params::DEFAULT);
        let block = expand(&table, table.start());
        assert_eq!(
            *block.rows(),
            [[0, 0, 2, 2], [0, 0, 2, 0], [2, 2, 3, 3], [2, 0, 3, 0]]
        );
    }

    #[test]
    fn zero_is_absorbing() {
        let table = RuleTable::build(&Params::DEFAULT);
        assert_eq!(expand(&table, Pattern::ZERO), Block::default());
    }

    #[test]
    fn quadrants_are_rule_images() {
        let params = Params::new(14, 3, 6, 10).unwrap();
        let table = RuleTable::build(&params);
        let p = Pattern::new([[3, 6], [10, 1]]);
        let block = expand(&table, p);
        for qy in 0..2 {
            for qx in 0..2 {
                assert_eq!(block.quadrant(qy, qx), table.rule(p.get(qy, qx)));
            }
        }
    }
}
