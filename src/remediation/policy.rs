/// The set of bucket-level protections a remediation applies. All four flags
/// are always enabled; partial configurations are not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessBlockPolicy {
    block_public_acls: bool,
    ignore_public_acls: bool,
    block_public_policy: bool,
    restrict_public_buckets: bool,
}

impl AccessBlockPolicy {
    pub const fn block_all() -> Self {
        Self {
            block_public_acls: true,
            ignore_public_acls: true,
            block_public_policy: true,
            restrict_public_buckets: true,
        }
    }

    pub const fn get_block_public_acls(&self) -> bool {
        self.block_public_acls
    }

    pub const fn get_ignore_public_acls(&self) -> bool {
        self.ignore_public_acls
    }

    pub const fn get_block_public_policy(&self) -> bool {
        self.block_public_policy
    }

    pub const fn get_restrict_public_buckets(&self) -> bool {
        self.restrict_public_buckets
    }
}
