use std::cell::Cell;
use std::rc::Rc;

#[allow(unused)]
pub const RANDOM_OPS_COUNT: usize = 1000;

#[allow(unused)]
pub fn init() {
    let _ = dotenv::dotenv();
    let _ = pretty_env_logger::try_init_timed();
}

/// A value counting the drops of itself and its clones.
#[allow(unused)]
#[derive(Debug, Clone, PartialEq)]
pub struct Tracked {
    pub tag: u32,
    drops: Rc<Cell<usize>>,
}

#[allow(unused)]
impl Tracked {
    pub fn new(tag: u32, drops: &Rc<Cell<usize>>) -> Self {
        Self { tag, drops: drops.to_owned() }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
