//! Core game-state model.
//!
//! Every operation is a pure transition: it reads one immutable snapshot and
//! returns the successor snapshot. The UI layer holds the latest snapshot,
//! renders it, and replaces it with whatever these methods return. Time only
//! enters through [`GameState::tick`]; the engine itself holds no thread and
//! starts no timer.

/// Seconds granted to a free (non-VIP) session
pub const FREE_SESSION_SECS: u32 = 300;

/// Seconds granted on VIP activation
pub const VIP_SESSION_SECS: u32 = 3600;

/// The 8 index triples that win on a 3x3 row-major board
const WINNING_TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's mark
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The opposing mark
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Display label for status lines and board cells
    pub fn label(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

/// Immutable game snapshot.
///
/// A session starts with the defaults below; each accepted intent or clock
/// tick produces a successor snapshot and the old one is discarded.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// 3x3 board in row-major order; `None` is an empty cell
    pub board: [Option<Player>; 9],
    /// Mark placed by the next accepted move
    pub current_player: Player,
    /// True while moves may still be accepted (no win, tie, or lock yet)
    pub game_active: bool,
    /// True once a VIP code has been accepted; never reverts within a session
    pub is_vip: bool,
    /// Seconds remaining in the current session
    pub time_left: u32,
    /// Human-readable summary of the current phase; recomputed each transition
    pub status: String,
    /// True once the free-session timer expired mid-game. Only VIP activation
    /// clears it; board and player stay frozen until then.
    pub locked: bool,
    /// VIP badge text; empty until activation
    pub vip_status: String,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [None; 9],
            current_player: Player::X,
            game_active: true,
            is_vip: false,
            time_left: FREE_SESSION_SECS,
            status: "Player X's turn".to_string(),
            locked: false,
            vip_status: String::new(),
        }
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// One logical second of the session clock.
    ///
    /// Decrements the timer while it is above zero. When a free session hits
    /// zero the game locks; a VIP session just lets the displayed timer sit
    /// at zero. Board and current player are never touched.
    pub fn tick(&self) -> Self {
        let mut next = self.clone();
        if next.time_left > 0 {
            next.time_left -= 1;
            if next.time_left == 0 && !next.is_vip {
                next.game_active = false;
                next.locked = true;
                next.status = "Game locked. Enter VIP code to continue.".to_string();
            }
        }
        next
    }

    /// Attempt to place the current player's mark at `index` (0..9, row-major).
    ///
    /// Illegal moves are rejected by returning the snapshot unchanged: the
    /// game is inactive, the cell is occupied, or a free session has run out
    /// of time. An out-of-range index is a caller bug rather than a
    /// game-state conflict and panics.
    pub fn make_move(&self, index: usize) -> Self {
        assert!(index < 9, "cell index {index} outside the 3x3 board");
        if !self.game_active || self.board[index].is_some() {
            return self.clone();
        }
        if !self.is_vip && self.time_left == 0 {
            return self.clone();
        }

        let mut next = self.clone();
        next.board[index] = Some(next.current_player);

        if winner_on(&next.board).is_some() {
            next.game_active = false;
            next.status = format!("Player {} wins!", next.current_player.label());
        } else if next.board.iter().all(|cell| cell.is_some()) {
            next.game_active = false;
            next.status = "It's a tie!".to_string();
        } else {
            next.current_player = next.current_player.other();
            next.status = format!("Player {}'s turn", next.current_player.label());
        }
        next
    }

    /// Start a fresh round, keeping the session timer and VIP flag.
    /// No-op while locked; only VIP activation can revive a locked session.
    pub fn new_game(&self) -> Self {
        if self.locked {
            return self.clone();
        }
        let mut next = self.clone();
        next.clear_round();
        next
    }

    /// Start a fresh round and, for free sessions only, restore the timer.
    ///
    /// VIP sessions keep whatever time they have left; only a fresh
    /// activation replenishes a VIP clock.
    pub fn reset_game(&self) -> Self {
        if self.locked {
            return self.clone();
        }
        let mut next = self.clone();
        next.clear_round();
        if !next.is_vip {
            next.time_left = FREE_SESSION_SECS;
        }
        next
    }

    /// Redeem a VIP code. Any non-blank code is accepted; there is no backend
    /// to validate against.
    ///
    /// Activation unlocks and reactivates the game unconditionally, even
    /// after a finished win or tie, leaving the board as it stands.
    pub fn activate_vip(&self, code: &str) -> Self {
        if code.trim().is_empty() {
            return self.clone();
        }
        let mut next = self.clone();
        next.is_vip = true;
        next.time_left = VIP_SESSION_SECS;
        next.vip_status = "VIP Status: ACTIVE (60 minutes)".to_string();
        next.locked = false;
        next.game_active = true;
        next.status = format!(
            "VIP Activated! Player {}'s turn",
            next.current_player.label()
        );
        next
    }

    fn clear_round(&mut self) {
        self.board = [None; 9];
        self.game_active = true;
        self.current_player = Player::X;
        self.status = "Player X's turn".to_string();
    }
}

/// Mark owning a completed winning triple, if any
fn winner_on(board: &[Option<Player>; 9]) -> Option<Player> {
    for [a, b, c] in WINNING_TRIPLES {
        if board[a].is_some() && board[a] == board[b] && board[b] == board[c] {
            return board[a];
        }
    }
    None
}
