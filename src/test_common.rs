use crate::hash::Algorithm;
use crate::merkle::MerkleTree;
use std::fmt;
use std::hash::Hasher;

pub const SIZE: usize = 0x10;

pub type Item = [u8; SIZE];

/// Cheap position sensitive test hash: every byte is folded into a 16 byte
/// ring, rotated by the number of times the ring has wrapped.
#[derive(Debug, Copy, Clone, Default)]
pub struct XOR128 {
    data: Item,
    i: usize,
}

impl XOR128 {
    pub fn new() -> XOR128 {
        XOR128 {
            data: [0; SIZE],
            i: 0,
        }
    }
}

impl Hasher for XOR128 {
    fn write(&mut self, bytes: &[u8]) {
        for x in bytes {
            let turn = (self.i / SIZE) as u32;
            self.data[self.i & (SIZE - 1)] ^= x.rotate_left(turn);
            self.i += 1;
        }
    }

    fn finish(&self) -> u64 {
        let mut h: u64 = 0;
        let mut off: u64 = 0;
        for i in 0..8 {
            h |= (self.data[i] as u64) << off;
            off += 8;
        }
        h
    }
}

impl Algorithm<Item> for XOR128 {
    #[inline]
    fn hash(&mut self) -> Item {
        self.data
    }

    #[inline]
    fn reset(&mut self) {
        *self = XOR128::new();
    }
}

impl fmt::UpperHex for XOR128 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for b in self.data.iter() {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

/// Leaf contents `"0"`, `"1"`, ... `"{leafs - 1}"`.
pub fn numbered(leafs: usize) -> Vec<String> {
    (0..leafs).map(|i| i.to_string()).collect()
}

pub fn get_xor_tree(leafs: usize) -> MerkleTree<Item, XOR128> {
    MerkleTree::new(numbered(leafs), XOR128::new()).expect("failed to create tree from slice")
}

#[test]
fn test_hasher_simple() {
    let mut h = XOR128::new();
    h.write(b"1234567812345678");
    assert_eq!(format!("{:#X}", h), "0x31323334353637383132333435363738");
    h.reset();
    h.write(b"12345678");
    assert_eq!(format!("{:X}", h), "31323334353637380000000000000000");
    // second lap is rotated: '1' = 0x31 -> 0x62, 0x31 ^ 0x62 = 0x53
    h.write(b"123456781");
    assert_eq!(format!("{:X}", h), "53323334353637383132333435363738");
}
