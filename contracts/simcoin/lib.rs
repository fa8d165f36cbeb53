#![cfg_attr(not(feature = "std"), no_std)]

#[ink::contract]
mod simcoin {
    use ink::prelude::string::String;
    use ink::storage::Mapping;

    pub type Result<T> = core::result::Result<T, Error>;

    /// Reserved "no account" identity. Transfers and approvals targeting it
    /// are rejected; issuance and destruction notifications use `None` instead.
    pub const NULL_IDENTITY: [u8; 32] = [0x00; 32];

    /// Allowance sentinel that `transfer_from` never decrements.
    pub const UNLIMITED_ALLOWANCE: Balance = Balance::MAX;

    pub const DECIMALS: u8 = 18;

    #[derive(scale::Encode, scale::Decode, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        InsufficientBalance,
        InsufficientAllowance,
        Overflow,
        NotOwner,
        Paused,
        AlreadyPaused,
        NotPaused,
        NullAccount,
        SupplyCapExceeded,
    }

    #[ink(event)]
    pub struct Transferred {
        #[ink(topic)]
        from_acc: Option<AccountId>,
        #[ink(topic)]
        to_acc: Option<AccountId>,
        amount: Balance,
    }

    #[ink(event)]
    pub struct Approved {
        #[ink(topic)]
        owner_acc: AccountId,
        #[ink(topic)]
        spender_acc: AccountId,
        amount: Balance,
    }

    #[ink(event)]
    pub struct Paused {
        #[ink(topic)]
        by_acc: AccountId,
    }

    #[ink(event)]
    pub struct Unpaused {
        #[ink(topic)]
        by_acc: AccountId,
    }

    #[ink(event)]
    pub struct OwnershipTransferred {
        #[ink(topic)]
        previous_acc: Option<AccountId>,
        #[ink(topic)]
        new_acc: Option<AccountId>,
    }

    #[ink(event)]
    pub struct AssetInfoUpdated {
        asset_info_uri: String,
        #[ink(topic)]
        updated_by: AccountId,
    }

    #[ink(storage)]
    pub struct Simcoin {
        // governance / control
        owner_acc: Option<AccountId>,
        paused_flag: bool,

        // token state
        total_supply: Balance,
        max_supply: Balance,
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,

        // metadata
        token_name: String,
        token_symbol: String,
        asset_info_uri: String,
    }

    impl Simcoin {
        /// Credits `initial_supply` to the caller, who becomes the owner.
        /// `max_supply` is fixed for the lifetime of the contract.
        #[ink(constructor)]
        pub fn new(
            token_name: String,
            token_symbol: String,
            initial_supply: Balance,
            max_supply: Balance,
        ) -> Result<Self> {
            if initial_supply > max_supply {
                return Err(Error::SupplyCapExceeded)
            }
            let creator_acc = Self::env().caller();
            let mut balances = Mapping::default();
            balances.insert(&creator_acc, &initial_supply);

            Self::env().emit_event(Transferred {
                from_acc: None,
                to_acc: Some(creator_acc),
                amount: initial_supply,
            });

            Ok(Self {
                owner_acc: Some(creator_acc),
                paused_flag: false,
                total_supply: initial_supply,
                max_supply,
                balances,
                allowances: Mapping::default(),
                token_name,
                token_symbol,
                asset_info_uri: String::new(),
            })
        }

        // -------- read API --------

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        #[ink(message)]
        pub fn max_supply(&self) -> Balance {
            self.max_supply
        }

        #[ink(message)]
        pub fn balance_of(&self, owner_acc: AccountId) -> Balance {
            self.balances.get(&owner_acc).unwrap_or(0)
        }

        #[ink(message)]
        pub fn my_balance(&self) -> Balance {
            let caller_acc = self.env().caller();
            self.balance_of(caller_acc)
        }

        #[ink(message)]
        pub fn allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Balance {
            self.allowances.get(&(owner_acc, spender_acc)).unwrap_or(0)
        }

        #[ink(message)]
        pub fn owner(&self) -> Option<AccountId> {
            self.owner_acc
        }

        #[ink(message)]
        pub fn is_paused(&self) -> bool {
            self.paused_flag
        }

        #[ink(message)]
        pub fn token_name(&self) -> String {
            self.token_name.clone()
        }

        #[ink(message)]
        pub fn token_symbol(&self) -> String {
            self.token_symbol.clone()
        }

        #[ink(message)]
        pub fn decimals(&self) -> u8 {
            DECIMALS
        }

        #[ink(message)]
        pub fn asset_info(&self) -> String {
            self.asset_info_uri.clone()
        }

        // -------- write API: ledger --------

        #[ink(message)]
        pub fn transfer(&mut self, to_acc: AccountId, amount: Balance) -> Result<()> {
            self.when_not_paused()?;
            Self::not_null(to_acc)?;
            let from_acc = self.env().caller();
            self.move_balance(from_acc, to_acc, amount)
        }

        /// Overwrites the current allowance for (caller, spender). Concurrent
        /// callers racing an overwrite can double-spend the old allowance.
        #[ink(message)]
        pub fn approve(&mut self, spender_acc: AccountId, amount: Balance) -> Result<()> {
            self.when_not_paused()?;
            Self::not_null(spender_acc)?;
            let owner_acc = self.env().caller();
            self.allowances.insert(&(owner_acc, spender_acc), &amount);
            self.env().emit_event(Approved { owner_acc, spender_acc, amount });
            Ok(())
        }

        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            from_acc: AccountId,
            to_acc: AccountId,
            amount: Balance,
        ) -> Result<()> {
            self.when_not_paused()?;
            Self::not_null(to_acc)?;

            let caller_acc = self.env().caller();
            let allowance_amt = self.allowances.get(&(from_acc, caller_acc)).unwrap_or(0);
            if allowance_amt < amount {
                return Err(Error::InsufficientAllowance)
            }

            // Precheck the balance: a failing move must not consume allowance
            if self.balances.get(&from_acc).unwrap_or(0) < amount {
                return Err(Error::InsufficientBalance)
            }

            self.move_balance(from_acc, to_acc, amount)?;

            if allowance_amt != UNLIMITED_ALLOWANCE {
                let new_allowance = allowance_amt.checked_sub(amount).ok_or(Error::Overflow)?;
                self.allowances.insert(&(from_acc, caller_acc), &new_allowance);
            }
            Ok(())
        }

        // -------- write API: supply governance --------

        /// Owner-only issuance, capped by `max_supply`.
        #[ink(message)]
        pub fn mint(&mut self, to_acc: AccountId, amount: Balance) -> Result<()> {
            self.only_owner()?;
            self.when_not_paused()?;
            Self::not_null(to_acc)?;

            let new_total = self.total_supply.checked_add(amount).ok_or(Error::Overflow)?;
            if new_total > self.max_supply {
                return Err(Error::SupplyCapExceeded)
            }

            self.credit_balance(to_acc, amount)?;
            self.total_supply = new_total;

            self.env().emit_event(Transferred {
                from_acc: None,
                to_acc: Some(to_acc),
                amount,
            });
            Ok(())
        }

        /// Owner-only destruction, drawn from the owner's own balance.
        #[ink(message)]
        pub fn burn(&mut self, amount: Balance) -> Result<()> {
            self.only_owner()?;
            self.when_not_paused()?;

            let caller_acc = self.env().caller();
            self.debit_balance(caller_acc, amount)?;
            self.total_supply = self.total_supply.checked_sub(amount).ok_or(Error::Overflow)?;

            self.env().emit_event(Transferred {
                from_acc: Some(caller_acc),
                to_acc: None,
                amount,
            });
            Ok(())
        }

        // -------- write API: operational switch --------

        #[ink(message)]
        pub fn pause(&mut self) -> Result<()> {
            self.only_owner()?;
            if self.paused_flag {
                return Err(Error::AlreadyPaused)
            }
            self.paused_flag = true;
            self.env().emit_event(Paused { by_acc: self.env().caller() });
            Ok(())
        }

        #[ink(message)]
        pub fn unpause(&mut self) -> Result<()> {
            self.only_owner()?;
            if !self.paused_flag {
                return Err(Error::NotPaused)
            }
            self.paused_flag = false;
            self.env().emit_event(Unpaused { by_acc: self.env().caller() });
            Ok(())
        }

        // -------- write API: access control --------

        #[ink(message)]
        pub fn transfer_ownership(&mut self, new_owner_acc: AccountId) -> Result<()> {
            self.only_owner()?;
            Self::not_null(new_owner_acc)?;
            let previous_acc = self.owner_acc;
            self.owner_acc = Some(new_owner_acc);
            self.env().emit_event(OwnershipTransferred {
                previous_acc,
                new_acc: Some(new_owner_acc),
            });
            Ok(())
        }

        /// Clears the owner permanently. Every owner-gated operation (mint,
        /// burn, pause, unpause, set_asset_info, transfer_ownership) becomes
        /// unreachable forever; there is no recovery path.
        #[ink(message)]
        pub fn renounce_ownership(&mut self) -> Result<()> {
            self.only_owner()?;
            let previous_acc = self.owner_acc;
            self.owner_acc = None;
            self.env().emit_event(OwnershipTransferred {
                previous_acc,
                new_acc: None,
            });
            Ok(())
        }

        // -------- write API: metadata --------

        /// Owner-only, deliberately not gated by the switch. Notifies on
        /// every write, including a write of the current value.
        #[ink(message)]
        pub fn set_asset_info(&mut self, new_uri: String) -> Result<()> {
            self.only_owner()?;
            let updated_by = self.env().caller();
            self.asset_info_uri = new_uri.clone();
            self.env().emit_event(AssetInfoUpdated {
                asset_info_uri: new_uri,
                updated_by,
            });
            Ok(())
        }

        // -------- modifiers (helpers) --------

        fn only_owner(&self) -> Result<()> {
            if self.owner_acc != Some(self.env().caller()) {
                return Err(Error::NotOwner)
            }
            Ok(())
        }

        fn when_not_paused(&self) -> Result<()> {
            if self.paused_flag {
                return Err(Error::Paused)
            }
            Ok(())
        }

        fn not_null(acc: AccountId) -> Result<()> {
            if acc == AccountId::from(NULL_IDENTITY) {
                return Err(Error::NullAccount)
            }
            Ok(())
        }

        // ---- internals ----

        fn move_balance(&mut self, from_acc: AccountId, to_acc: AccountId, amount: Balance) -> Result<()> {
            self.debit_balance(from_acc, amount)?;
            self.credit_balance(to_acc, amount)?;
            self.env().emit_event(Transferred {
                from_acc: Some(from_acc),
                to_acc: Some(to_acc),
                amount,
            });
            Ok(())
        }

        // Both primitives re-check the switch: every balance mutation, whether
        // a transfer leg or an issuance/destruction leg, routes through here.

        fn debit_balance(&mut self, acc: AccountId, amount: Balance) -> Result<()> {
            self.when_not_paused()?;
            let bal = self.balances.get(&acc).unwrap_or(0);
            if bal < amount {
                return Err(Error::InsufficientBalance)
            }
            let new_bal = bal.checked_sub(amount).ok_or(Error::Overflow)?;
            self.balances.insert(&acc, &new_bal);
            Ok(())
        }

        fn credit_balance(&mut self, acc: AccountId, amount: Balance) -> Result<()> {
            self.when_not_paused()?;
            let bal = self.balances.get(&acc).unwrap_or(0);
            let new_bal = bal.checked_add(amount).ok_or(Error::Overflow)?;
            self.balances.insert(&acc, &new_bal);
            Ok(())
        }
    }

}
