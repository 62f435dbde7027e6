use crate::board::{Board, ColorId, Coord};

/// Parses an array of string slices into a `Board`.
///
/// Each string slice in the input array represents a row on the board,
/// starting from row 0. The board dimensions are taken from the input:
/// the height is the number of rows and the width is the character
/// length of the first row. Every row must have the same length.
///
/// Valid characters for cells are:
/// - 'R': red
/// - 'G': green
/// - 'B': blue
/// - 'Y': yellow
/// - 'P': purple
/// - 'C': cyan
/// - 'W': white
/// - '.': an empty cell
///
/// Any other character will result in an error.
///
/// # Arguments
/// * `rows`: A slice of string slices (`&[&str]`) representing the rows
///   of the board, starting from the top (row 0).
///
/// # Returns
/// * `Ok(Board)` if parsing is successful.
/// * `Err(String)` if:
///     - The input is empty, or its first row is empty.
///     - Any row's character length differs from row 0's.
///     - An unrecognized character is encountered.
///
/// # Examples
/// ```
/// use color_lines::board::{ColorId, Coord};
/// use color_lines::utils::board_from_str_rows;
///
/// let rows = [
///     "RGY", // Row 0
///     "B.P", // Row 1
/// ];
/// let board = board_from_str_rows(&rows).unwrap();
/// assert_eq!(board.width(), 3);
/// assert_eq!(board.height(), 2);
/// assert_eq!(board.get(Coord::new(0, 0)), Ok(Some(ColorId::Red)));
/// assert_eq!(board.get(Coord::new(1, 1)), Ok(None));
///
/// let invalid_char_rows = ["RXB"];
/// assert!(board_from_str_rows(&invalid_char_rows).is_err());
/// ```
pub fn board_from_str_rows(rows: &[&str]) -> Result<Board, String> {
    if rows.is_empty() {
        return Err("Invalid number of rows. Expected at least 1, found 0".to_string());
    }

    let width = rows[0].chars().count();
    if width == 0 {
        return Err("Row 0 is empty. Expected at least 1 character".to_string());
    }

    let mut board = Board::new(width, rows.len());
    for (r, row_str) in rows.iter().enumerate() {
        let row_len = row_str.chars().count();
        if row_len != width {
            return Err(format!(
                "Row {} has the wrong length. Expected {} characters, found {}",
                r, width, row_len
            ));
        }

        for (c, ch) in row_str.chars().enumerate() {
            let cell = match ch {
                '.' => None,
                _ => match ColorId::from_char(ch) {
                    Some(color) => Some(color),
                    None => {
                        return Err(format!(
                            "Unrecognized character '{}' in row {} col {}",
                            ch, r, c
                        ))
                    }
                },
            };
            board
                .set(Coord::new(r, c), cell)
                .expect("parsed coordinates lie within the freshly built board");
        }
    }
    Ok(board)
}
