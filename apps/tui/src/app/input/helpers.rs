pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 || index >= len {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index >= len - 1 {
        0
    } else {
        index + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        assert_eq!(wrap_increment(4, 5), 0);
        assert_eq!(wrap_decrement(0, 5), 4);
        assert_eq!(wrap_decrement(2, 5), 1);
        assert_eq!(wrap_increment(0, 0), 0);
        // out-of-range positions restart at either end
        assert_eq!(wrap_increment(usize::MAX, 5), 0);
        assert_eq!(wrap_decrement(usize::MAX, 5), 4);
    }
}
