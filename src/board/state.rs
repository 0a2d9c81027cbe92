use std::fmt;
use std::hash::{Hash, Hasher};

use once_cell::unsync::OnceCell;

use super::{CastlingRights, Color, InvariantViolation, Piece, Role, Square};

/// Lazily computed check and checkmate verdicts, indexed by color.
///
/// Cells are reset by every mutation and never cloned, so a cached value
/// always describes the instance that holds it.
#[derive(Debug, Default)]
pub(crate) struct StatusCache {
    pub(crate) check: [OnceCell<bool>; 2],
    pub(crate) checkmate: [OnceCell<bool>; 2],
}

/// A full snapshot of a game: placement, side to move, castling rights,
/// en passant target, and the log of captured pieces.
#[derive(Debug)]
pub struct Position {
    pub(crate) squares: [Option<Piece>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,
    pub(crate) graveyard: Vec<Piece>,
    pub(crate) cache: StatusCache,
}

const BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

impl Position {
    /// The standard initial setup, white to move.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        for (file, &role) in BACK_RANK.iter().enumerate() {
            position.set_piece(Square(0, file), Piece::new(Color::White, role));
            position.set_piece(Square(7, file), Piece::new(Color::Black, role));
            position.set_piece(Square(1, file), Piece::new(Color::White, Role::Pawn));
            position.set_piece(Square(6, file), Piece::new(Color::Black, Role::Pawn));
        }
        position.castling_rights = CastlingRights::all();
        position
    }

    /// A board with no pieces and no castling rights, white to move.
    #[must_use]
    pub fn empty() -> Self {
        Position {
            squares: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_square: None,
            graveyard: Vec::new(),
            cache: StatusCache::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.as_index()]
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// The square a pawn passed over on the previous ply, if it advanced two.
    #[inline]
    #[must_use]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    /// Captured pieces in capture order.
    #[must_use]
    pub fn graveyard(&self) -> &[Piece] {
        &self.graveyard
    }

    /// Every occupied square with its piece, a1 first.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, p)| p.map(|piece| (Square::from_index(idx), piece)))
    }

    /// The pieces of one side with their squares, a1 first.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, p)| p.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|p| p.is_some()).count()
    }

    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.as_index()].is_none()
    }

    pub(crate) fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    /// Locate the king of `color`.
    pub fn king_square(&self, color: Color) -> Result<Square, InvariantViolation> {
        let king = Piece::new(color, Role::King);
        self.occupied()
            .find(|&(_, p)| p == king)
            .map(|(sq, _)| sq)
            .ok_or(InvariantViolation::MissingKing { color })
    }

    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.as_index()] = Some(piece);
        self.invalidate();
    }

    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.invalidate();
        self.squares[sq.as_index()].take()
    }

    /// Drop every cached verdict; called on each mutation.
    pub(crate) fn invalidate(&mut self) {
        self.cache = StatusCache::default();
    }

    /// Text diagram with one character per square and a space between files.
    ///
    /// White's perspective puts rank 8 on top and file a on the left; black's
    /// reverses both.
    #[must_use]
    pub fn render(&self, perspective: Color) -> String {
        let mut ranks: Vec<usize> = (0..8).rev().collect();
        let mut files: Vec<usize> = (0..8).collect();
        if perspective == Color::Black {
            ranks.reverse();
            files.reverse();
        }

        let mut out = String::with_capacity(8 * 16 + 1);
        for &rank in &ranks {
            for (i, &file) in files.iter().enumerate() {
                let c = self
                    .piece_at(Square(rank, file))
                    .map_or(' ', Piece::to_fen_char);
                out.push(c);
                out.push(if i == 7 { '\n' } else { ' ' });
            }
        }
        out.push('\n');
        out
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

/// Copies the board state and capture log; cached verdicts stay behind.
impl Clone for Position {
    fn clone(&self) -> Self {
        Position {
            squares: self.squares,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_square: self.en_passant_square,
            graveyard: self.graveyard.clone(),
            cache: StatusCache::default(),
        }
    }
}

/// Positions compare by board state only; the graveyard is an audit log.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
            && self.side_to_move == other.side_to_move
            && self.castling_rights == other.castling_rights
            && self.en_passant_square == other.en_passant_square
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.squares.hash(state);
        self.side_to_move.hash(state);
        self.castling_rights.hash(state);
        self.en_passant_square.hash(state);
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Color::White))
    }
}
