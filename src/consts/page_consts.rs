pub const PAGE_SIZE: usize = 4096;     // total page size in bytes
pub const PAGE_HEADER_SIZE: usize = 8; // version + num_records + free_space_ptr + reserved
pub const SLOT_SIZE: usize = 4;        // record_offset + record_length, both u16
