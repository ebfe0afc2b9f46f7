//! Keyboard input: raw key codes are mapped to logical keys, queued as they
//! arrive, and folded into one [`InputSnapshot`] per tick.

/// Logical keys the game reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogicalKey {
    Left,
    Right,
    Jump,
}

impl LogicalKey {
    /// Map a `KeyboardEvent.code` value to a logical key.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "KeyA" => Some(LogicalKey::Left),
            "ArrowRight" | "KeyD" => Some(LogicalKey::Right),
            "Space" | "ArrowUp" | "KeyW" => Some(LogicalKey::Jump),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            LogicalKey::Left => 0,
            LogicalKey::Right => 1,
            LogicalKey::Jump => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEvent {
    Down(LogicalKey),
    Up(LogicalKey),
}

/// Input state consumed by one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    /// Fresh jump presses since the previous snapshot (auto-repeat excluded).
    pub jumps: u32,
}

impl InputSnapshot {
    pub fn idle() -> Self {
        Self::default()
    }
}

#[derive(Debug, Default)]
pub struct InputTracker {
    held: [bool; 3],
    queue: Vec<KeyEvent>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a key-down. Returns false for keys the game does not use.
    pub fn key_down(&mut self, code: &str) -> bool {
        match LogicalKey::from_code(code) {
            Some(key) => {
                self.queue.push(KeyEvent::Down(key));
                true
            }
            None => false,
        }
    }

    /// Queue a key-up. Returns false for keys the game does not use.
    pub fn key_up(&mut self, code: &str) -> bool {
        match LogicalKey::from_code(code) {
            Some(key) => {
                self.queue.push(KeyEvent::Up(key));
                true
            }
            None => false,
        }
    }

    pub fn is_held(&self, key: LogicalKey) -> bool {
        self.held[key.index()]
    }

    /// Drain queued events in arrival order into a snapshot for this tick.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let mut jumps = 0;
        for event in self.queue.drain(..) {
            match event {
                KeyEvent::Down(key) => {
                    let held = &mut self.held[key.index()];
                    // A down on a key that is already held is auto-repeat.
                    if !*held {
                        *held = true;
                        if key == LogicalKey::Jump {
                            jumps += 1;
                        }
                    }
                }
                KeyEvent::Up(key) => self.held[key.index()] = false,
            }
        }
        InputSnapshot {
            left: self.is_held(LogicalKey::Left),
            right: self.is_held(LogicalKey::Right),
            jumps,
        }
    }
}
