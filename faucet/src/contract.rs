use cosmwasm_std::{
    entry_point, to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, Event, MessageInfo,
    Response, StdResult, WasmMsg,
};
use cw2::set_contract_version;
use cw20::Cw20ExecuteMsg;

use crate::eligibility::{claimable_at, ensure_claimable, remaining_allowance};
use crate::error::ContractError;
use crate::msg::{
    AdminResponse, CanClaimResponse, ClaimInfoResponse, ConfigResponse, ExecuteMsg,
    InstantiateMsg, MigrateMsg, QueryMsg, RemainingAllowanceResponse, StatsResponse,
    TokenResponse,
};
use crate::state::{
    Config, Stats, CLAIMS, CLAIM_AMOUNT, CONFIG, CONTRACT_NAME, CONTRACT_VERSION,
    COOLDOWN_PERIOD, MAX_LIFETIME_CLAIM, STATS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender,
    };
    let token = deps.api.addr_validate(&msg.token)?;

    let config = Config {
        admin,
        token,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("token", config.token))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RequestTokens {} => execute_request_tokens(deps, env, info),
        ExecuteMsg::SetPaused { paused } => execute_set_paused(deps, info, paused),
    }
}

fn execute_request_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let now = env.block.time.seconds();

    let existing = CLAIMS.may_load(deps.storage, &info.sender)?;
    let first_claim = existing.is_none();
    let mut record = existing.unwrap_or_default();

    ensure_claimable(config.paused, &record, now)?;

    record.last_claim_time = now;
    record.total_claimed = record.total_claimed.checked_add(CLAIM_AMOUNT)?;
    CLAIMS.save(deps.storage, &info.sender, &record)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_claims += 1;
    stats.total_distributed = stats.total_distributed.checked_add(CLAIM_AMOUNT)?;
    if first_claim {
        stats.unique_claimants += 1;
    }
    STATS.save(deps.storage, &stats)?;

    // Reverts the whole claim if the faucet does not hold the minter role
    let mint_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: info.sender.to_string(),
            amount: CLAIM_AMOUNT,
        })?,
        funds: vec![],
    });

    let event = Event::new("tokens_claimed")
        .add_attribute("claimant", info.sender.as_str())
        .add_attribute("amount", CLAIM_AMOUNT)
        .add_attribute("timestamp", now.to_string());

    Ok(Response::new()
        .add_message(mint_msg)
        .add_event(event)
        .add_attribute("action", "request_tokens")
        .add_attribute("claimant", info.sender)
        .add_attribute("total_claimed", record.total_claimed))
}

fn execute_set_paused(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    config.paused = paused;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_paused")
        .add_attribute("paused", paused.to_string()))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::CanClaim { address } => to_json_binary(&query_can_claim(deps, env, address)?),
        QueryMsg::RemainingAllowance { address } => {
            to_json_binary(&query_remaining_allowance(deps, address)?)
        }
        QueryMsg::Token {} => to_json_binary(&query_token(deps)?),
        QueryMsg::Admin {} => to_json_binary(&query_admin(deps)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::ClaimInfo { address } => {
            to_json_binary(&query_claim_info(deps, env, address)?)
        }
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
    }
}

fn query_can_claim(deps: Deps, env: Env, address: String) -> StdResult<CanClaimResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let config = CONFIG.load(deps.storage)?;
    let record = CLAIMS.may_load(deps.storage, &addr)?.unwrap_or_default();

    let can_claim = ensure_claimable(config.paused, &record, env.block.time.seconds()).is_ok();
    Ok(CanClaimResponse { can_claim })
}

fn query_remaining_allowance(deps: Deps, address: String) -> StdResult<RemainingAllowanceResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let record = CLAIMS.may_load(deps.storage, &addr)?.unwrap_or_default();

    Ok(RemainingAllowanceResponse {
        remaining: remaining_allowance(&record)?,
    })
}

fn query_token(deps: Deps) -> StdResult<TokenResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(TokenResponse {
        token: config.token.to_string(),
    })
}

fn query_admin(deps: Deps) -> StdResult<AdminResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(AdminResponse {
        admin: config.admin.to_string(),
    })
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        token: config.token,
        paused: config.paused,
        claim_amount: CLAIM_AMOUNT,
        max_lifetime_claim: MAX_LIFETIME_CLAIM,
        cooldown_period: COOLDOWN_PERIOD,
    })
}

fn query_claim_info(deps: Deps, env: Env, address: String) -> StdResult<ClaimInfoResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let config = CONFIG.load(deps.storage)?;
    let record = CLAIMS.may_load(deps.storage, &addr)?.unwrap_or_default();

    Ok(ClaimInfoResponse {
        remaining: remaining_allowance(&record)?,
        claimable_at: claimable_at(&record),
        can_claim: ensure_claimable(config.paused, &record, env.block.time.seconds()).is_ok(),
        last_claim_time: record.last_claim_time,
        total_claimed: record.total_claimed,
        address: addr,
    })
}

fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_claims: stats.total_claims,
        total_distributed: stats.total_distributed,
        unique_claimants: stats.unique_claimants,
    })
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
